use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatEntry {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelCollectionEntry {
    pub collection: String,
    pub count: usize,
    /// Records with `percentage` at 100.
    pub completed: usize,
}

/// Summary of a readable document, in a fixed order for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_name: Option<String>,
    pub player_id: Option<i64>,
    pub username: Option<String>,
    pub account_id: Option<i64>,
    pub bootups: Option<i64>,
    /// Statistics present in the document, in code order.
    pub stats: Vec<StatEntry>,
    pub collected_coin_flags: usize,
    pub levels: Vec<LevelCollectionEntry>,
    pub unlocked_events: Vec<String>,
}
