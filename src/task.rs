// src/task.rs
use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::merge::merge;
use crate::report;
use crate::store::HistoryStore;
use crate::topic::TopicEntry;

/// One fetch-merge-save-render cycle over an already fetched batch.
///
/// An empty batch means the feed had nothing for us (or the fetch failed);
/// nothing is written and `None` comes back. Otherwise today's stored record
/// is merged with the batch, persisted, and rendered to the dated report.
pub fn daily_task(
    base: &Path,
    raw: Vec<TopicEntry>,
    now: DateTime<Local>,
) -> Result<Option<(Vec<TopicEntry>, PathBuf)>> {
    if raw.is_empty() {
        info!("no feed update, leaving history untouched");
        return Ok(None);
    }

    let date = now.format("%Y-%m-%d").to_string();
    let store = HistoryStore::new(base);
    let merged = merge(raw, store.load(&date)?);
    store.save(&date, &merged)?;
    let report_path = report::write_report(base, &merged, now)?;

    info!(
        date = %date,
        entries = merged.len(),
        report = %report_path.display(),
        "daily task done"
    );
    Ok(Some((merged, report_path)))
}
