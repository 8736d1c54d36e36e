use anyhow::Result;

use super::ResultSink;
use crate::models::ResultRecord;

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Restores question order and hands the records to a sink.
pub struct ResultWriter<'a> {
    sink: &'a mut dyn ResultSink,
}

impl<'a> ResultWriter<'a> {
    pub fn new(sink: &'a mut dyn ResultSink) -> Self {
        Self { sink }
    }

    /// Sort by question send time and write everything in one call.
    pub fn write(&mut self, mut records: Vec<ResultRecord>) -> Result<usize> {
        records.sort_by_key(|r| r.timestamp);
        log_debug!("Writing {} result records", records.len());
        self.sink.write(&records)?;
        Ok(records.len())
    }
}
