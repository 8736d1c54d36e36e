use chrono::{DateTime, Duration, Utc};

use crate::correlation::config::CorrelationConfig;
use crate::models::{InboundMessage, ResponseWindow};

/// A run of replies with no pause longer than the configured gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseGroup {
    pub fragments: Vec<String>,
    pub last_at: DateTime<Utc>,
}

impl ResponseGroup {
    fn start(message: &InboundMessage) -> Self {
        Self {
            fragments: vec![message.text.trim().to_string()],
            last_at: message.timestamp,
        }
    }

    pub fn joined(&self, separator: &str) -> String {
        self.fragments.join(separator)
    }
}

/// Received messages that fall inside `window`, oldest first.
pub fn candidates<'a>(
    messages: &'a [InboundMessage],
    window: &ResponseWindow,
) -> Vec<&'a InboundMessage> {
    let mut picked: Vec<&InboundMessage> = messages
        .iter()
        .filter(|m| !m.is_outbound && window.contains(m.timestamp))
        .collect();
    // Stable: equal timestamps keep store order.
    picked.sort_by_key(|m| m.timestamp);
    picked
}

/// Split time-ordered candidates into bursts.
pub fn group_bursts(
    candidates: &[&InboundMessage],
    config: &CorrelationConfig,
) -> Vec<ResponseGroup> {
    let max_gap = i64::try_from(config.gap_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX);
    let mut groups = Vec::new();
    let mut current: Option<ResponseGroup> = None;

    for message in candidates {
        match &mut current {
            Some(group) if message.timestamp - group.last_at <= max_gap => {
                group.fragments.push(message.text.trim().to_string());
                group.last_at = message.timestamp;
            }
            _ => {
                if let Some(group) = current.take() {
                    groups.push(group);
                }
                current = Some(ResponseGroup::start(message));
            }
        }
    }

    if let Some(group) = current {
        groups.push(group);
    }

    groups
}
