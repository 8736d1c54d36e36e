use chrono::{DateTime, Utc};

use crate::correlation::config::CorrelationConfig;
use crate::correlation::grouping::{candidates, group_bursts};
use crate::correlation::windows::response_windows;
use crate::models::{Anchor, InboundMessage, ResultRecord};
use crate::utils::IdGenerator;

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// Partition the message snapshot into one response per anchor.
///
/// Returns exactly one record per anchor, in anchor order. `now` closes the
/// last question's window.
pub fn correlate(
    anchors: &[Anchor],
    messages: &[InboundMessage],
    now: DateTime<Utc>,
    config: &CorrelationConfig,
    ids: &mut dyn IdGenerator,
) -> Vec<ResultRecord> {
    // Step 1: Fix every boundary up front
    let windows = response_windows(anchors, now);

    anchors
        .iter()
        .zip(windows)
        .map(|(anchor, window)| {
            // Step 2: Keep received messages inside the window
            let picked = candidates(messages, &window);

            // Step 3: Split into bursts
            let groups = group_bursts(&picked, config);

            // Step 4: Join fragments, then bursts
            let responses = groups
                .iter()
                .map(|group| group.joined(&config.fragment_separator))
                .collect::<Vec<_>>()
                .join(&config.group_separator);

            log_info!(
                "Q{}: anchored at {}, collected {} responses",
                anchor.sequence_index,
                anchor.send_time.to_rfc3339(),
                groups.len()
            );
            log_debug!(
                "Q{} window [{}, {}) had {} candidate messages",
                anchor.sequence_index,
                window.start.to_rfc3339(),
                window.end.to_rfc3339(),
                picked.len()
            );

            ResultRecord {
                id: ids.next_id(),
                question_text: anchor.question_text.clone(),
                responses,
                timestamp: anchor.send_time,
            }
        })
        .collect()
}
