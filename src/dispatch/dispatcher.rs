use std::time::Duration;

use anyhow::{Context, Result};

use crate::models::Anchor;
use crate::settings::SurveyConfig;
use crate::transport::MessageTransport;
use crate::utils::{preview, Clock, Sleeper};

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

const PREVIEW_CHARS: usize = 60;

/// Pauses applied around the question loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchPlan {
    /// After question 1.
    pub first: Duration,
    /// After questions 2..N-1.
    pub subsequent: Duration,
    /// Once, after the whole loop.
    pub settle: Duration,
}

impl DispatchPlan {
    pub fn from_config(config: &SurveyConfig) -> Self {
        Self {
            first: Duration::from_secs(config.first_delay_secs),
            subsequent: Duration::from_secs(config.subsequent_delay_secs),
            settle: Duration::from_secs(config.settle_delay_secs),
        }
    }

    fn pause_after(&self, index: usize) -> Duration {
        if index == 1 {
            self.first
        } else {
            self.subsequent
        }
    }
}

/// Sends the questionnaire and records when each question went out.
pub struct Dispatcher<'a> {
    transport: &'a dyn MessageTransport,
    clock: &'a dyn Clock,
    sleeper: &'a dyn Sleeper,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        transport: &'a dyn MessageTransport,
        clock: &'a dyn Clock,
        sleeper: &'a dyn Sleeper,
    ) -> Self {
        Self {
            transport,
            clock,
            sleeper,
        }
    }

    /// Send every question in order and return one anchor per question.
    ///
    /// A transport failure aborts the loop; anchors collected so far are lost.
    pub fn dispatch(
        &self,
        recipient: &str,
        questions: &[String],
        plan: &DispatchPlan,
    ) -> Result<Vec<Anchor>> {
        let total = questions.len();
        let mut anchors = Vec::with_capacity(total);

        for (offset, question) in questions.iter().enumerate() {
            let index = offset + 1;
            log_info!(
                "Sending question {}/{}: {}",
                index,
                total,
                preview(question, PREVIEW_CHARS)
            );

            self.transport
                .send(recipient, question)
                .with_context(|| format!("failed to send question {index}/{total}"))?;
            let send_time = self.clock.now();
            anchors.push(Anchor::new(index, send_time, question.clone()));
            log_debug!("Question {} anchored at {}", index, send_time.to_rfc3339());

            if index < total {
                let pause = plan.pause_after(index);
                log_info!("Waiting {} seconds after question {}...", pause.as_secs(), index);
                self.sleeper.sleep(pause);
            }
        }

        log_info!("Waiting {} seconds for late responses...", plan.settle.as_secs());
        self.sleeper.sleep(plan.settle);

        Ok(anchors)
    }
}
