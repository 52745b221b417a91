// src/publish.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::process::Command;
use tracing::warn;

/// Pushes the updated working tree somewhere after a run. The pipeline only
/// knows this trait, never git itself.
pub trait Publisher {
    fn publish(&self, when: DateTime<Local>) -> Result<()>;
}

/// stage → commit(타임스탬프 메시지) → push. Best-effort: non-zero exit codes
/// are logged and ignored, only a failure to spawn git surfaces as an error.
pub struct GitPublisher {
    pub remote: String,
    pub branch: String,
}

impl Default for GitPublisher {
    fn default() -> Self {
        Self { remote: "origin".into(), branch: "main".into() }
    }
}

impl Publisher for GitPublisher {
    fn publish(&self, when: DateTime<Local>) -> Result<()> {
        run_git(&["add", "."])?;
        let message = format!("Auto update {}", when.format("%Y-%m-%d %H:%M"));
        run_git(&["commit", "-m", &message])?;
        run_git(&["push", &self.remote, &self.branch])?;
        Ok(())
    }
}

fn run_git(args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .args(args)
        .status()
        .with_context(|| format!("spawn git {}", args.join(" ")))?;
    if !status.success() {
        warn!("git {} exited with {status}", args.join(" "));
    }
    Ok(())
}
