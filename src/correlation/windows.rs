use chrono::{DateTime, Utc};

use crate::models::{Anchor, ResponseWindow};

/// Materialise every response window before any message is looked at.
///
/// Window `i` ends exactly where window `i + 1` starts; the last window ends
/// at `now`. Anchors must be in send order.
pub fn response_windows(anchors: &[Anchor], now: DateTime<Utc>) -> Vec<ResponseWindow> {
    anchors
        .iter()
        .enumerate()
        .map(|(i, anchor)| {
            let end = anchors
                .get(i + 1)
                .map(|next| next.send_time)
                .unwrap_or(now);
            ResponseWindow::new(anchor.send_time, end)
        })
        .collect()
}
