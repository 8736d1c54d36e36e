pub mod csv;
pub mod writer;

use anyhow::Result;

use crate::models::ResultRecord;

pub use csv::CsvResultSink;
pub use writer::ResultWriter;

/// Persists the complete result set in one go, replacing anything written before.
pub trait ResultSink {
    fn write(&mut self, records: &[ResultRecord]) -> Result<()>;
}
