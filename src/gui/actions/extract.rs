// src/gui/actions/extract.rs
use crate::{extract::Extractor, gui::app::App};

pub fn extract(app: &mut App) {
    let text = &app.state.session.input;
    if text.trim().is_empty() {
        app.status("Paste some text first");
        logd!("Extract: Clicked, but the input is empty");
        return;
    }

    logf!("Extract: Begin chars={}", text.len());
    let result = Extractor::new(&app.state.options.extract).extract(text);
    let found = result.usernames.len();
    logf!("Extract: OK usernames={} trace_lines={}", found, result.debug_trace.len());

    app.state.session.load_extraction(result);

    if found == 0 {
        app.status("No valid usernames found.");
    } else {
        app.status(format!("Found {found} unique usernames!"));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::state::AppState;

    fn app_with(input: &str) -> App {
        let mut app = App::new(AppState::default(), PathBuf::from("unused.cfg"));
        app.state.session.input = s!(input);
        app
    }

    #[test]
    fn blank_paste_asks_for_text() {
        let mut app = app_with(" \n\t\r\n ");
        extract(&mut app);
        assert_eq!(app.status, "Paste some text first");
        assert!(app.state.session.last.is_none());
    }

    #[test]
    fn pasted_cards_load_the_table() {
        let mut app = app_with("aliceuser\nAlice\nPPS: 4.0/5.0");
        extract(&mut app);
        assert_eq!(app.status, "Found 1 unique usernames!");
        assert_eq!(app.state.session.row_count(), 1);
    }
}
