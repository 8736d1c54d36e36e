pub mod clock;
pub mod ids;
pub mod logging;

pub use clock::{Clock, Sleeper, SystemClock, ThreadSleeper};
pub use ids::{IdGenerator, UuidGenerator};

/// Shorten `text` to at most `max_chars` characters for log lines.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_keeps_short_text() {
        assert_eq!(preview("hello", 60), "hello");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("héllo wörld", 4), "héll...");
    }
}
