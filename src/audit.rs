//! Append-only audit trail of registry mutations.
//!
//! One JSON event per line, flushed as it is written. The log only
//! observes the store; nothing in the registry depends on it.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::user::User;

pub struct AuditLog {
    pub path: PathBuf,
    session_id: String,
    file: File,
}

#[derive(Serialize)]
struct Event<'a> {
    ts: DateTime<Utc>,
    session_id: &'a str,
    #[serde(rename = "type")]
    event_type: &'a str,
    #[serde(flatten)]
    data: serde_json::Value,
}

impl AuditLog {
    pub fn new(path: &Path, session_id: &str) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            session_id: session_id.to_string(),
            file,
        })
    }

    pub fn log(&mut self, event_type: &str, data: serde_json::Value) -> Result<()> {
        let event = Event {
            ts: Utc::now(),
            session_id: &self.session_id,
            event_type,
            data,
        };
        let line = serde_json::to_string(&event)?;
        writeln!(self.file, "{}", line)?;
        self.file.flush()?;
        Ok(())
    }

    pub fn user_created(&mut self, user: &User) -> Result<()> {
        self.log("user_created", serde_json::json!({ "user": user }))
    }

    pub fn user_rejected(&mut self, name: &str, reason: &str) -> Result<()> {
        self.log(
            "user_rejected",
            serde_json::json!({ "name": name, "reason": reason }),
        )
    }

    /// Log a deactivation attempt; `applied` records whether the store
    /// actually flipped the status.
    pub fn user_deactivated(&mut self, id: u64, applied: bool) -> Result<()> {
        self.log(
            "user_deactivated",
            serde_json::json!({ "id": id, "applied": applied }),
        )
    }

    pub fn registry_cleared(&mut self) -> Result<()> {
        self.log("registry_cleared", serde_json::json!({}))
    }
}
