use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::correlation::CorrelationConfig;

const DEFAULT_MESSAGES_DB: &str = "~/Library/Messages/chat.db";
const DEFAULT_OUTPUT_CSV: &str = "qa_results_cleaned.csv";
const DEFAULT_LOG_FILE: &str = "sms_processing.log";

fn default_questions() -> Vec<String> {
    [
        "What signs indicate my child might be dehydrated?",
        "How can I help my baby with colic?",
        "When should my toddler start potty training?",
        "What should I do if my child has a rash?",
        "Is it normal for my child to stutter sometimes?",
        "How do I know if my child is getting enough iron?",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Everything a survey run needs, fixed at process start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub recipient: String,
    pub questions: Vec<String>,
    pub first_delay_secs: u64,
    pub subsequent_delay_secs: u64,
    pub settle_delay_secs: u64,
    pub gap_secs: u64,
    pub fetch_margin_secs: u64,
    pub messages_db: PathBuf,
    pub output_csv: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            questions: default_questions(),
            first_delay_secs: 120,
            subsequent_delay_secs: 80,
            settle_delay_secs: 180,
            gap_secs: 30,
            fetch_margin_secs: 10,
            messages_db: PathBuf::from(DEFAULT_MESSAGES_DB),
            output_csv: PathBuf::from(DEFAULT_OUTPUT_CSV),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl SurveyConfig {
    /// Read a JSON config file. Absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Defaults, overlaid with `path` when it is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.recipient.trim().is_empty() {
            bail!("recipient must be set");
        }
        if self.questions.is_empty() {
            bail!("at least one question is required");
        }
        if let Some(pos) = self.questions.iter().position(|q| q.trim().is_empty()) {
            bail!("question {} is blank", pos + 1);
        }
        Ok(())
    }

    pub fn correlation(&self) -> CorrelationConfig {
        CorrelationConfig::with_gap_secs(self.gap_secs)
    }

    /// `messages_db` with a leading `~` replaced by `$HOME`.
    pub fn messages_db_path(&self) -> PathBuf {
        expand_home(&self.messages_db)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}
