/// Tunables for splitting a reply stream into per-question responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationConfig {
    /// A pause longer than this between two replies starts a new burst.
    pub gap_secs: u64,

    /// Joins the message fragments of one burst.
    pub fragment_separator: String,

    /// Joins the bursts of one question. Must differ from `fragment_separator`.
    pub group_separator: String,
}

impl CorrelationConfig {
    pub fn with_gap_secs(gap_secs: u64) -> Self {
        Self {
            gap_secs,
            ..Self::default()
        }
    }
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            gap_secs: 30,
            fragment_separator: " ".into(),
            group_separator: " || ".into(),
        }
    }
}
