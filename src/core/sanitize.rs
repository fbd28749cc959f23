// src/core/sanitize.rs

/// Unicode whitespace plus the `\x1c`..`\x1f` separators, which pasted
/// text treats as blank too.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// `str::trim` over [`is_space`].
pub fn trim_ws(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Split on `\n`, trim each line, drop the ones that end up empty.
/// `\r` from CRLF input goes away with the trim.
pub fn clean_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(trim_ws)
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File-system friendly stem: ASCII alphanumerics, `-`, `_`; whitespace runs
/// become one `_`. Falls back to `fallback` when nothing is left.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_lines_drops_blank_and_trims() {
        assert_eq!(clean_lines(" a \r\n\r\n\tb\n   \n"), vec!["a", "b"]);
        assert!(clean_lines("").is_empty());
    }

    #[test]
    fn separator_only_lines_count_as_blank() {
        assert_eq!(clean_lines("alice_x\n\x1c\nfiller\n\x1f \x1e"), vec!["alice_x", "filler"]);
        assert_eq!(trim_ws("\x1d\u{a0}x\u{2003}"), "x");
    }

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  Video \t Views\n"), "Video Views");
    }

    #[test]
    fn sanitize_filename_variants() {
        assert_eq!(sanitize_filename("May  batch #2", "x"), "May_batch_2");
        assert_eq!(sanitize_filename("__", "fallback"), "fallback");
        assert_eq!(sanitize_filename("a-b_c", "x"), "a-b_c");
    }
}
