// src/main.rs
use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod fetch;
mod merge;
mod publish;
mod report;
mod store;
mod task;
mod topic;

use publish::{GitPublisher, Publisher};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // ── ENV로 조절 가능한 경로/프리뷰/푸시, 스케줄은 외부 cron 몫
    let base: PathBuf = std::env::var("HOT_DIR").unwrap_or_else(|_| "files/weibo".into()).into();
    let preview_n: usize = std::env::var("PREVIEW_N").ok().and_then(|s| s.parse().ok()).unwrap_or(10);
    let no_push = std::env::var("HOT_NO_PUSH").is_ok();

    let now = Local::now();

    info!("fetching hot search…");
    let raw = fetch::fetch_hot_search();

    let Some((merged, report_path)) = task::daily_task(&base, raw, now)? else {
        return Ok(());
    };

    // ── 콘솔 프리뷰
    println!("[微博热搜 Top {}]\n", merged.len());
    for entry in merged.iter().take(preview_n) {
        println!("- {entry}");
    }
    println!("\nreport: {}", report_path.display());

    if no_push {
        info!("HOT_NO_PUSH set, skipping publish");
        return Ok(());
    }
    if let Err(e) = GitPublisher::default().publish(now) {
        warn!("publish failed: {e:#}");
    }

    Ok(())
}
