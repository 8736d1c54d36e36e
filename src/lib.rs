pub mod cli;
pub mod correlation;
pub mod db;
pub mod dispatch;
pub mod export;
pub mod models;
pub mod settings;
pub mod survey;
pub mod transport;
pub mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use db::ChatDatabase;
use export::CsvResultSink;
use settings::SurveyConfig;
use survey::{run_survey, SurveyIo};
use transport::AppleScriptTransport;
use utils::{SystemClock, ThreadSleeper, UuidGenerator};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = SurveyConfig::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);

    utils::logging::init(config.log_file.as_deref())?;

    log::info!("Starting SMS question-response survey");

    let transport = AppleScriptTransport::new();
    let store = ChatDatabase::new(config.messages_db_path());
    let mut sink = CsvResultSink::new(config.output_csv.clone());
    let mut ids = UuidGenerator;

    let summary = run_survey(
        &config,
        SurveyIo {
            transport: &transport,
            store: &store,
            sink: &mut sink,
            clock: &SystemClock,
            sleeper: &ThreadSleeper,
            ids: &mut ids,
        },
    )
    .map_err(|err| {
        log::error!("Survey aborted: {err:#}");
        err
    })?;

    log::info!(
        "Summary:\n- Questions sent: {}\n- Messages fetched: {}\n\
         - Results saved to: {}\n- Log saved to: {}",
        summary.questions_sent,
        summary.messages_fetched,
        config.output_csv.display(),
        config
            .log_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stderr".into())
    );

    Ok(())
}
