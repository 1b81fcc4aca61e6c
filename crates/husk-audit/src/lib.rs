//! Audit trail for husk.
//!
//! Every executed action becomes one `LogEntry`, appended in memory and
//! then persisted by rewriting the whole XML document. The rewrite is a
//! policy choice carried over from the emulated shell: after any prefix
//! of N actions the file holds exactly the pretty-printed serialization
//! of those N entries, nothing more, nothing less.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use husk_types::Result;

/// One audited record of a dispatched command.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// The logged command string (not always the raw input line).
    pub command: String,
    /// User the session runs as.
    pub user: String,
    /// Wall-clock time of the action, second resolution.
    pub time: DateTime<Local>,
    /// Whether this records an error path (unknown command).
    pub is_error: bool,
}

/// Ordered, append-only action log with full-rewrite persistence.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    user: String,
    entries: Vec<LogEntry>,
}

impl AuditLog {
    /// Start a fresh log at `path` for `user`.
    ///
    /// Deletes any pre-existing file at the path, then persists an
    /// empty document once.
    pub fn create(path: impl Into<PathBuf>, user: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        let log = Self {
            path,
            user: user.into(),
            entries: Vec::new(),
        };
        log.persist()?;
        Ok(log)
    }

    /// Record one action and rewrite the persisted document.
    pub fn record(&mut self, command: &str, is_error: bool) -> Result<()> {
        self.entries.push(LogEntry {
            command: command.to_string(),
            user: self.user.clone(),
            time: Local::now(),
            is_error,
        });
        self.persist()
    }

    /// All recorded entries, in call order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Where the document is persisted.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the accumulated entries as the full XML document.
    pub fn to_xml(&self) -> String {
        let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        if self.entries.is_empty() {
            doc.push_str("<Logs/>\n");
            return doc;
        }
        doc.push_str("<Logs>\n");
        for entry in &self.entries {
            doc.push_str(&format!(
                "  <Action user=\"{}\" time=\"{}\" command=\"{}\"",
                xml_escape(&entry.user),
                entry.time.format("%Y-%m-%d %H:%M:%S"),
                xml_escape(&entry.command),
            ));
            if entry.is_error {
                doc.push_str(" is_error=\"true\"");
            }
            doc.push_str("/>\n");
        }
        doc.push_str("</Logs>\n");
        doc
    }

    fn persist(&self) -> Result<()> {
        std::fs::write(&self.path, self.to_xml())?;
        Ok(())
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
