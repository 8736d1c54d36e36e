use chrono::{DateTime, Utc};

/// Half-open interval `[start, end)` during which inbound messages are
/// attributed to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ResponseWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn start_is_inclusive_and_end_is_exclusive() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let window = ResponseWindow::new(t0, t0 + Duration::seconds(80));

        assert!(window.contains(t0));
        assert!(window.contains(t0 + Duration::seconds(79)));
        assert!(!window.contains(t0 + Duration::seconds(80)));
        assert!(!window.contains(t0 - Duration::milliseconds(1)));
    }
}
