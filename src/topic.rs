// src/topic.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// One hot-search entry, shaped exactly like the upstream feed items and the
/// `history.json` records: `realpos` / `word` / `num` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    #[serde(rename = "realpos")]
    pub rank: u32,
    pub word: String,
    #[serde(rename = "num")]
    pub heat: i64,
}

impl fmt::Display for TopicEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}. {} ({})", self.rank, self.word, self.heat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_feed() {
        let entry: TopicEntry =
            serde_json::from_str(r#"{"realpos":3,"word":"天气","num":1234}"#).unwrap();
        assert_eq!(entry.rank, 3);
        assert_eq!(entry.word, "天气");
        assert_eq!(entry.heat, 1234);

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["realpos"], 3);
        assert_eq!(back["num"], 1234);
    }

    #[test]
    fn extra_feed_fields_are_ignored() {
        let entry: TopicEntry = serde_json::from_str(
            r#"{"realpos":1,"word":"A","num":500,"label_name":"热","onboard_time":1}"#,
        )
        .unwrap();
        assert_eq!(entry.word, "A");
    }
}
