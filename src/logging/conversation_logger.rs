// Conversation logger: one JSON line per completed turn

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::agent::{Envelope, Source};

/// A single logged turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Unique ID for this turn
    pub id: String,

    /// When the turn completed
    pub timestamp: DateTime<Utc>,

    /// User's utterance
    pub query: String,

    /// Normalized answer text
    pub answer: String,

    /// Provenance tag of the capability that answered
    pub source: Source,
}

impl TurnRecord {
    pub fn new(query: impl Into<String>, envelope: &Envelope) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            query: query.into(),
            answer: envelope.answer.clone(),
            source: envelope.source,
        }
    }
}

/// Appends turn records to dated JSONL files under `{base_dir}/conversations`.
pub struct ConversationLogger {
    log_dir: PathBuf,
}

impl ConversationLogger {
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        let log_dir = base_dir.join("conversations");
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
        Ok(Self { log_dir })
    }

    /// Append one record. Callers treat failures as non-fatal.
    pub fn log(&self, record: &TurnRecord) -> Result<()> {
        let path = self.current_file();
        let line = serde_json::to_string(record).context("Failed to serialize turn record")?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        debug!(id = %record.id, file = %path.display(), "logged turn");
        Ok(())
    }

    /// Today's log file path.
    pub fn current_file(&self) -> PathBuf {
        let date = Utc::now().format("%Y-%m-%d");
        self.log_dir.join(format!("{}.jsonl", date))
    }
}
