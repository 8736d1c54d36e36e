use anyhow::{Context, Result};
use chrono::Duration;

use crate::{
    correlation::correlate,
    db::MessageStore,
    dispatch::{DispatchPlan, Dispatcher},
    export::{ResultSink, ResultWriter},
    settings::SurveyConfig,
    transport::MessageTransport,
    utils::{Clock, IdGenerator, Sleeper},
};

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// External collaborators of one survey run.
pub struct SurveyIo<'a> {
    pub transport: &'a dyn MessageTransport,
    pub store: &'a dyn MessageStore,
    pub sink: &'a mut dyn ResultSink,
    pub clock: &'a dyn Clock,
    pub sleeper: &'a dyn Sleeper,
    pub ids: &'a mut dyn IdGenerator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySummary {
    pub questions_sent: usize,
    pub messages_fetched: usize,
    pub records_written: usize,
}

/// Dispatch every question, then correlate the replies and write them out.
pub fn run_survey(config: &SurveyConfig, io: SurveyIo<'_>) -> Result<SurveySummary> {
    config.validate()?;

    let started_at = io.clock.now();
    let since = i64::try_from(config.fetch_margin_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|margin| started_at.checked_sub_signed(margin))
        .context("fetch margin is too large")?;
    let plan = DispatchPlan::from_config(config);

    let anchors = Dispatcher::new(io.transport, io.clock, io.sleeper)
        .dispatch(&config.recipient, &config.questions, &plan)?;

    let messages = io
        .store
        .fetch_since(since)
        .context("failed to fetch messages for correlation")?;
    if messages.iter().all(|m| m.is_outbound) {
        log_warn!("No replies found since {}", since.to_rfc3339());
    }
    log_info!(
        "Correlating {} messages against {} questions",
        messages.len(),
        anchors.len()
    );

    let now = io.clock.now();
    let records = correlate(&anchors, &messages, now, &config.correlation(), io.ids);

    let records_written = ResultWriter::new(io.sink).write(records)?;
    log_info!("Saved results to {}", config.output_csv.display());

    Ok(SurveySummary {
        questions_sent: anchors.len(),
        messages_fetched: messages.len(),
        records_written,
    })
}
