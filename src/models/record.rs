use chrono::{DateTime, Utc};

/// One row of survey output: a question and everything the recipient replied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub id: String,
    pub question_text: String,
    /// Reply bursts joined with the group separator; empty when nothing arrived.
    pub responses: String,
    /// Send time of the question's anchor.
    pub timestamp: DateTime<Utc>,
}
