use std::path::PathBuf;

use clap::Parser;

use crate::settings::SurveyConfig;

#[derive(Debug, Parser)]
#[command(
    name = "textsurvey",
    version,
    about = "Send a questionnaire by SMS and collect the replies as CSV"
)]
pub struct Cli {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Phone number or handle to survey
    #[arg(short, long)]
    pub recipient: Option<String>,

    /// Messages database to read replies from
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// CSV file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Debug log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log to stderr only
    #[arg(long, conflicts_with = "log_file")]
    pub no_log_file: bool,

    /// Seconds of silence that split one reply from the next
    #[arg(long)]
    pub gap_secs: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut SurveyConfig) {
        if let Some(recipient) = &self.recipient {
            config.recipient = recipient.clone();
        }
        if let Some(db) = &self.db {
            config.messages_db = db.clone();
        }
        if let Some(output) = &self.output {
            config.output_csv = output.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        if self.no_log_file {
            config.log_file = None;
        }
        if let Some(gap) = self.gap_secs {
            config.gap_secs = gap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_fields() {
        let cli = Cli::parse_from([
            "textsurvey",
            "--recipient",
            "5559999",
            "--output",
            "out.csv",
            "--gap-secs",
            "45",
            "--no-log-file",
        ]);
        let mut config = SurveyConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.recipient, "5559999");
        assert_eq!(config.output_csv, PathBuf::from("out.csv"));
        assert_eq!(config.gap_secs, 45);
        assert_eq!(config.log_file, None);
        assert_eq!(config.first_delay_secs, 120);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["textsurvey", "--bogus"]).is_err());
    }
}
