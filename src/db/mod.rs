//! Read-only access to the macOS Messages store (`chat.db`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OpenFlags};

pub mod helpers;

use helpers::{apple_date_to_utc, utc_to_apple_nanos, NANOSECOND_DATE_THRESHOLD};

use crate::models::InboundMessage;

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Snapshot of every message at or after an instant, oldest first.
pub trait MessageStore {
    fn fetch_since(&self, since: DateTime<Utc>) -> Result<Vec<InboundMessage>>;
}

pub struct ChatDatabase {
    db_path: PathBuf,
}

impl ChatDatabase {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    fn open(&self) -> Result<Connection> {
        Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("failed to open message store {}", self.db_path.display()))
    }
}

impl MessageStore for ChatDatabase {
    fn fetch_since(&self, since: DateTime<Utc>) -> Result<Vec<InboundMessage>> {
        let conn = self.open()?;
        // Legacy rows store seconds; scale them so one bound fits both units.
        let mut stmt = conn
            .prepare(
                "SELECT date, is_from_me, text
                 FROM (
                    SELECT
                        date,
                        is_from_me,
                        text,
                        CASE WHEN abs(date) >= ?2 THEN date ELSE date * 1000000000 END AS date_ns
                    FROM message
                 )
                 WHERE date_ns >= ?1
                 ORDER BY date_ns ASC",
            )
            .context("failed to prepare message query")?;

        let rows = stmt.query_map(
            params![utc_to_apple_nanos(since), NANOSECOND_DATE_THRESHOLD],
            |row| {
                let date: i64 = row.get(0)?;
                let is_from_me: Option<i64> = row.get(1)?;
                let text: Option<String> = row.get(2)?;
                Ok((date, is_from_me.unwrap_or(0) != 0, text.unwrap_or_default()))
            },
        )?;

        let mut messages = Vec::new();
        for row in rows {
            let (date, is_outbound, text) = row.context("failed to read message row")?;
            messages.push(InboundMessage {
                timestamp: apple_date_to_utc(date)?,
                is_outbound,
                text,
            });
        }

        log_debug!(
            "Fetched {} messages since {} from {}",
            messages.len(),
            since.to_rfc3339(),
            self.db_path.display()
        );

        Ok(messages)
    }
}
