//! Translation between a tag tree (terse keys) and a readable document.
//!
//! Decoding drops keys it has no name for. Encoding refuses them: a readable
//! key without a terse counterpart is an [`EncodeError`].

pub mod events;
pub mod level;
pub mod stats;

use tracing::{debug, trace};

use crate::error::EncodeError;
use crate::keys::Tables;
use crate::value::Dict;

pub use level::LEVEL_COLLECTIONS;

pub const STATS_ENTRY: &str = "stats";
pub const EVENTS_ENTRY: &str = "unlockValueKeeper";
/// Icon and item unlock flags; keys pass through untranslated.
pub const UNLOCKED_ITEMS_ENTRY: &str = "unlockedItems";

/// Which sub-codec a root entry goes through, by readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Stats,
    Levels,
    Events,
    Plain,
}

impl Section {
    fn of(readable: &str) -> Self {
        match readable {
            STATS_ENTRY => Self::Stats,
            EVENTS_ENTRY => Self::Events,
            name if LEVEL_COLLECTIONS.contains(&name) => Self::Levels,
            _ => Self::Plain,
        }
    }
}

pub fn decode_document(tree: Dict, tables: &Tables) -> Dict {
    let mut doc = Dict::new();
    let mut dropped = 0usize;
    for (terse, value) in tree {
        let Some(name) = tables.root.readable(terse.as_str()) else {
            trace!(key = %terse, "dropping unknown root key");
            dropped += 1;
            continue;
        };
        let value = match Section::of(name) {
            Section::Stats => stats::decode(value, tables),
            Section::Levels => level::decode_collection(value, tables),
            Section::Events => events::decode(value, tables),
            Section::Plain => value,
        };
        doc.insert(name.to_string(), value);
    }
    debug!(entries = doc.len(), dropped, "decoded document");
    doc
}

pub fn encode_document(doc: &Dict, tables: &Tables) -> Result<Dict, EncodeError> {
    let mut tree = Dict::new();
    for (name, value) in doc {
        let terse = tables.root.try_terse(name)?;
        let value = match Section::of(name) {
            Section::Stats => stats::encode(value, tables)?,
            Section::Levels => level::encode_collection(value, tables)?,
            Section::Events => events::encode(value, tables)?,
            Section::Plain => value.clone(),
        };
        tree.insert(terse.to_string(), value);
    }
    debug!(entries = tree.len(), "encoded document");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Domain;
    use crate::value::Value;

    #[test]
    fn unknown_root_key_is_dropped() {
        let mut tree = Dict::new();
        tree.insert("ZZZ_99".to_string(), Value::Integer(1));
        let mut stats = Dict::new();
        stats.insert("6".to_string(), Value::from("10"));
        tree.insert("GS_value".to_string(), Value::Dictionary(stats));

        let doc = decode_document(tree, Tables::global());
        assert_eq!(doc.len(), 1);
        assert!(!doc.contains_key("ZZZ_99"));
        assert_eq!(
            doc["stats"].as_dict().and_then(|s| s.get("stars")),
            Some(&Value::from("10"))
        );
    }

    #[test]
    fn unknown_readable_key_fails_encode() {
        let mut doc = Dict::new();
        doc.insert("playerName".to_string(), Value::from("RobTop"));
        doc.insert("bogusField".to_string(), Value::Integer(1));

        let err = encode_document(&doc, Tables::global()).expect_err("bogus key");
        assert_eq!(
            err,
            EncodeError::UnknownKey {
                domain: Domain::Root,
                key: "bogusField".to_string(),
            }
        );
    }

    #[test]
    fn sections_route_by_readable_name() {
        assert_eq!(Section::of("stats"), Section::Stats);
        assert_eq!(Section::of("unlockValueKeeper"), Section::Events);
        for name in LEVEL_COLLECTIONS {
            assert_eq!(Section::of(name), Section::Levels);
        }
        assert_eq!(Section::of("localLevels"), Section::Plain);
    }
}
