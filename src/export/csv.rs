use std::path::PathBuf;

use anyhow::{Context, Result};

use super::ResultSink;
use crate::models::ResultRecord;

const HEADERS: [&str; 4] = ["question_id", "question", "responses", "timestamp"];
const DELIMITER: char = ',';

/// Writes records as a CSV file, overwriting it.
pub struct CsvResultSink {
    path: PathBuf,
}

impl CsvResultSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn escape_field(&self, field: &str) -> String {
        if field.contains(DELIMITER)
            || field.contains('"')
            || field.contains('\n')
            || field.contains('\r')
        {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn row(&self, fields: &[&str]) -> String {
        let separator = DELIMITER.to_string();
        let mut line = fields
            .iter()
            .map(|f| self.escape_field(f))
            .collect::<Vec<_>>()
            .join(&separator);
        line.push_str("\r\n");
        line
    }

    /// Render the whole document in memory.
    pub fn render(&self, records: &[ResultRecord]) -> String {
        let mut out = self.row(&HEADERS);
        for record in records {
            let timestamp = record.timestamp.to_rfc3339();
            out.push_str(&self.row(&[
                record.id.as_str(),
                record.question_text.as_str(),
                record.responses.as_str(),
                timestamp.as_str(),
            ]));
        }
        out
    }
}

impl ResultSink for CsvResultSink {
    fn write(&mut self, records: &[ResultRecord]) -> Result<()> {
        let document = self.render(records);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
        std::fs::write(&self.path, document)
            .with_context(|| format!("failed to write results to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, question: &str, responses: &str) -> ResultRecord {
        ResultRecord {
            id: id.into(),
            question_text: question.into(),
            responses: responses.into(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn header_then_rows_in_given_order() {
        let sink = CsvResultSink::new(PathBuf::from("unused.csv"));
        let out = sink.render(&[record("a", "Q1?", "yes"), record("b", "Q2?", "")]);
        let lines: Vec<&str> = out.split("\r\n").collect();

        assert_eq!(lines[0], "question_id,question,responses,timestamp");
        assert_eq!(lines[1], "a,Q1?,yes,2024-05-01T09:00:00+00:00");
        assert_eq!(lines[2], "b,Q2?,,2024-05-01T09:00:00+00:00");
    }

    #[test]
    fn fields_with_commas_quotes_or_newlines_are_quoted() {
        let sink = CsvResultSink::new(PathBuf::from("unused.csv"));
        let out = sink.render(&[record("a", "Fever, rash?", "she said \"ok\"\nthen left")]);

        assert!(out.contains("\"Fever, rash?\""));
        assert!(out.contains("\"she said \"\"ok\"\"\nthen left\""));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("results.csv");
        let mut sink = CsvResultSink::new(path.clone());

        sink.write(&[record("a", "Q1?", "first run"), record("b", "Q2?", "")]).unwrap();
        sink.write(&[record("c", "Q1?", "second run")]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("first run"));
        assert_eq!(contents.lines().count(), 2);
    }
}
