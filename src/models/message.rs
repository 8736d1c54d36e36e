//! A row of the message store as seen by the correlator.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub timestamp: DateTime<Utc>,
    /// Sent by the operator; never counted as a reply.
    pub is_outbound: bool,
    pub text: String,
}

impl InboundMessage {
    pub fn received(timestamp: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            is_outbound: false,
            text: text.into(),
        }
    }

    pub fn sent(timestamp: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            is_outbound: true,
            text: text.into(),
        }
    }
}
