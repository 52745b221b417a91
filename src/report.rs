// src/report.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::topic::TopicEntry;

const SEARCH_BASE: &str = "https://s.weibo.com/weibo";

/// Markdown report: title, update timestamp, rank/word/heat table. Rows keep
/// `record`'s order — the merger already rank-sorted it.
pub fn render(record: &[TopicEntry], now: DateTime<Local>) -> String {
    let mut lines = vec![
        "# 微博热搜榜\n".to_string(),
        format!("**更新时间**: {}\n", now.format("%Y-%m-%d %H:%M")),
        "---\n".to_string(),
        "| 排名 | 热搜词 | 热度 |".to_string(),
        "|------|--------|------|".to_string(),
    ];

    for entry in record {
        lines.push(format!(
            "| {} | [{}]({}) | {} |",
            entry.rank,
            entry.word,
            search_url(&entry.word),
            format_heat(entry.heat),
        ));
    }

    lines.join("\n")
}

/// `<base>/<YYYY>/<MM>/微博热搜-<YYYYMMDD>.md`
pub fn report_path(base: &Path, now: DateTime<Local>) -> PathBuf {
    base.join(now.format("%Y").to_string())
        .join(now.format("%m").to_string())
        .join(format!("微博热搜-{}.md", now.format("%Y%m%d")))
}

/// Renders and writes the dated report, creating parent directories and
/// overwriting any previous file at that path.
pub fn write_report(base: &Path, record: &[TopicEntry], now: DateTime<Local>) -> Result<PathBuf> {
    let path = report_path(base, now);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&path, render(record, now))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

fn search_url(word: &str) -> String {
    // 고정 base URL이라 실패할 일은 없지만 unwrap 대신 폴백
    match Url::parse_with_params(SEARCH_BASE, &[("q", word)]) {
        Ok(u) => u.to_string(),
        Err(_) => SEARCH_BASE.to_string(),
    }
}

/// 10만 이상은 "N.n万", 그 미만은 정수 그대로
pub fn format_heat(heat: i64) -> String {
    if heat >= 100_000 {
        format!("{:.1}万", heat as f64 / 10_000.0)
    } else {
        heat.to_string()
    }
}
