use chrono::{DateTime, Utc};

/// A question's send event. Fixes the start of its response window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// 1-based position in the questionnaire.
    pub sequence_index: usize,
    /// Captured right after the send call returned.
    pub send_time: DateTime<Utc>,
    pub question_text: String,
}

impl Anchor {
    pub fn new(
        sequence_index: usize,
        send_time: DateTime<Utc>,
        question_text: impl Into<String>,
    ) -> Self {
        Self {
            sequence_index,
            send_time,
            question_text: question_text.into(),
        }
    }
}
