// src/merge.rs
use std::collections::HashMap;

use crate::topic::TopicEntry;

/// 하루 기록은 상위 50개까지만 보관
pub const TOP_N: usize = 50;

/// Folds freshly fetched entries into today's stored record:
/// - dedup by word, a stored entry is only replaced by a strictly higher heat
/// - stable sort descending by heat (ties keep insertion order: stored
///   entries first, then new items in feed order)
/// - truncate to the top 50 and reassign 1-based ranks
///
/// Re-merging the same feed against the previous result is a no-op.
pub fn merge(new_items: Vec<TopicEntry>, existing: Vec<TopicEntry>) -> Vec<TopicEntry> {
    let mut entries = existing;
    let mut index: HashMap<String, usize> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.word.clone(), i))
        .collect();

    for item in new_items {
        match index.get(&item.word) {
            Some(&i) if entries[i].heat >= item.heat => {}
            Some(&i) => entries[i] = item,
            None => {
                index.insert(item.word.clone(), entries.len());
                entries.push(item);
            }
        }
    }

    entries.sort_by(|a, b| b.heat.cmp(&a.heat));
    entries.truncate(TOP_N);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = (i + 1) as u32;
    }
    entries
}
