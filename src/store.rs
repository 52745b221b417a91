// src/store.rs
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::topic::TopicEntry;

/// date("YYYY-MM-DD") → 그날의 랭킹 기록
type History = BTreeMap<String, Vec<TopicEntry>>;

/// Read-modify-write access to the single `history.json` document. The whole
/// file is rewritten on every save; there is no locking, overlapping runs
/// can race.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(base: &Path) -> Self {
        Self { path: base.join("history.json") }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record stored under `date`; empty when the file or the key is absent.
    /// A document that exists but cannot be parsed is an error — a corrupt
    /// history must not be mistaken for an empty one.
    pub fn load(&self, date: &str) -> Result<Vec<TopicEntry>> {
        let mut history = self.read_document()?;
        Ok(history.remove(date).unwrap_or_default())
    }

    /// Sets `date` to `record` and rewrites the whole document.
    pub fn save(&self, date: &str, record: &[TopicEntry]) -> Result<()> {
        let mut history = self.read_document()?;
        history.insert(date.to_string(), record.to_vec());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let body = serde_json::to_string(&history)?;
        fs::write(&self.path, body)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }

    fn read_document(&self) -> Result<History> {
        if !self.path.exists() {
            return Ok(History::new());
        }
        let body = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        serde_json::from_str(&body)
            .with_context(|| format!("corrupt history document {}", self.path.display()))
    }
}
