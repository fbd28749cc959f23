// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Append one formatted line to a debug trace.
///
/// `note!(trace, "Found {} non-empty lines", n)` is shorthand for
/// `trace.push(format!(..))` and mirrors the line to the debug log.
#[macro_export]
macro_rules! note {
    ($trace:expr, $($arg:tt)*) => {{
        let line = ::std::format!($($arg)*);
        $crate::logd!("Trace: {}", line);
        $trace.push(line);
    }};
}
