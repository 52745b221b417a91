// src/fetch.rs
use anyhow::{Context, Result, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, COOKIE};
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

use crate::topic::TopicEntry;

const API: &str = "https://weibo.com/ajax/side/hotSearch";
const UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const TIMEOUT_SECS: u64 = 10;

/// One GET against the hot-search endpoint. Any failure is logged and comes
/// back as an empty list, which the caller treats as "no update available".
pub fn fetch_hot_search() -> Vec<TopicEntry> {
    match try_fetch() {
        Ok(entries) => entries,
        Err(e) => {
            warn!("hot search fetch failed: {e:#}");
            Vec::new()
        }
    }
}

fn try_fetch() -> Result<Vec<TopicEntry>> {
    let client = Client::builder()
        .user_agent(UA)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;

    let mut req = client.get(API).header(ACCEPT, "application/json");
    // 일부 지역/계정 상태에서는 쿠키가 있어야 실데이터가 내려온다
    if let Ok(cookie) = std::env::var("WEIBO_COOKIE") {
        if !cookie.is_empty() {
            req = req.header(COOKIE, cookie);
        }
    }

    let resp = req.send().context("GET hotSearch")?;
    let status = resp.status();
    if status != StatusCode::OK {
        bail!("unexpected status {status}");
    }

    let body: Value = resp.json().context("hotSearch body is not JSON")?;
    Ok(decode_payload(&body))
}

/// Pulls the ranked entries out of a feed payload. Items without `realpos`
/// are promoted content and get dropped; any shape mismatch yields empty.
pub fn decode_payload(body: &Value) -> Vec<TopicEntry> {
    if body.get("ok").and_then(Value::as_i64) != Some(1) {
        return Vec::new();
    }
    let Some(realtime) = body.pointer("/data/realtime").and_then(Value::as_array) else {
        return Vec::new();
    };

    realtime
        .iter()
        .filter(|item| item.get("realpos").is_some())
        .filter_map(|item| serde_json::from_value::<TopicEntry>(item.clone()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_keeps_ranked_entries_only() {
        let body = json!({
            "ok": 1,
            "data": {
                "realtime": [
                    {"realpos": 1, "word": "A", "num": 500, "label_name": "热"},
                    {"word": "推广内容", "num": 999_999},
                    {"realpos": 2, "word": "B", "num": 300},
                ]
            }
        });
        let entries = decode_payload(&body);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "A");
        assert_eq!(entries[1].word, "B");
    }

    #[test]
    fn decode_rejects_not_ok() {
        let body = json!({"ok": 0, "data": {"realtime": [{"realpos": 1, "word": "A", "num": 1}]}});
        assert!(decode_payload(&body).is_empty());
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(decode_payload(&json!({"ok": 1})).is_empty());
        assert!(decode_payload(&json!({"ok": 1, "data": {"realtime": 7}})).is_empty());
        assert!(decode_payload(&json!("oops")).is_empty());
        assert!(decode_payload(&json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn decode_skips_malformed_items() {
        let body = json!({
            "ok": 1,
            "data": {
                "realtime": [
                    {"realpos": 1, "word": "A", "num": 500},
                    {"realpos": 2, "num": 300},
                ]
            }
        });
        let entries = decode_payload(&body);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "A");
    }
}
