use flate2::Compression;

use crate::keys::Tables;
use crate::translate::stats::is_coin_key;
use crate::translate::{EVENTS_ENTRY, LEVEL_COLLECTIONS, STATS_ENTRY, UNLOCKED_ITEMS_ENTRY};
use crate::value::{Dict, Value};
use crate::{Document, decode, encode_with};

use super::error::{CoreError, CoreErrorCode};
use super::icons::{FIRST_UNLOCKABLE_ICON, IconKind};
use super::types::{LevelCollectionEntry, Snapshot, StatEntry};

/// Flag value the game writes for an unlocked event or item.
const UNLOCKED: &str = "1";

#[derive(Debug, Clone, Copy)]
pub struct Engine<'t> {
    tables: &'t Tables,
    compression: Compression,
}

#[derive(Debug, Clone)]
pub struct Session<'t> {
    engine: Engine<'t>,
    document: Document,
}

impl Engine<'static> {
    pub fn new() -> Self {
        Self::with_tables(Tables::global())
    }
}

impl Default for Engine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Engine<'t> {
    pub fn with_tables(tables: &'t Tables) -> Self {
        Self {
            tables,
            compression: Compression::default(),
        }
    }

    pub fn with_compression(mut self, level: Compression) -> Self {
        self.compression = level;
        self
    }

    pub fn tables(&self) -> &'t Tables {
        self.tables
    }

    pub fn decode_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<Document, CoreError> {
        decode(bytes.as_ref(), self.tables).map_err(|e| {
            let err = CoreError::from(e);
            CoreError::new(err.code, format!("failed to decode save: {}", err.message))
        })
    }

    pub fn encode_document(&self, document: &Document) -> Result<Vec<u8>, CoreError> {
        encode_with(document, self.tables, self.compression).map_err(|e| {
            let err = CoreError::from(e);
            CoreError::new(err.code, format!("failed to encode save: {}", err.message))
        })
    }

    pub fn open_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<Session<'t>, CoreError> {
        Ok(self.open_document(self.decode_bytes(bytes)?))
    }

    pub fn open_document(&self, document: Document) -> Session<'t> {
        Session {
            engine: *self,
            document,
        }
    }
}

impl<'t> Session<'t> {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CoreError> {
        self.engine.encode_document(&self.document)
    }

    fn stats(&self) -> Option<&Dict> {
        self.document.get(STATS_ENTRY).and_then(Value::as_dict)
    }

    /// A statistic by readable name, as stored.
    pub fn stat(&self, name: &str) -> Option<&Value> {
        self.stats().and_then(|stats| stats.get(name))
    }

    /// Statistics are stored as decimal strings; this reads them as numbers.
    pub fn stat_count(&self, name: &str) -> Option<i64> {
        self.stat(name).and_then(Value::as_i64)
    }

    /// Sets a statistic, in the string form the game writes.
    pub fn set_stat(&mut self, name: &str, value: i64) -> Result<(), CoreError> {
        if self.engine.tables.stats.terse(name).is_none() && !is_coin_key(name) {
            return Err(CoreError::new(
                CoreErrorCode::Encode,
                format!("unknown statistic `{name}`"),
            ));
        }
        self.section_mut(STATS_ENTRY)?
            .insert(name.to_string(), Value::String(value.to_string()));
        Ok(())
    }

    /// Marks one story event as unlocked.
    pub fn unlock_event(&mut self, name: &str) -> Result<(), CoreError> {
        if self.engine.tables.events.terse(name).is_none() {
            return Err(CoreError::new(
                CoreErrorCode::Encode,
                format!("unknown event `{name}`"),
            ));
        }
        self.section_mut(EVENTS_ENTRY)?
            .insert(name.to_string(), Value::from(UNLOCKED));
        Ok(())
    }

    pub fn unlock_all_events(&mut self) -> Result<(), CoreError> {
        let tables = self.engine.tables;
        let section = self.section_mut(EVENTS_ENTRY)?;
        for (_, name) in tables.events.pairs() {
            section.insert(name.to_string(), Value::from(UNLOCKED));
        }
        Ok(())
    }

    /// Unlocks one icon. Ids run from 2 to the kind's total.
    pub fn unlock_icon(&mut self, kind: IconKind, id: u32) -> Result<(), CoreError> {
        if !kind.contains(id) {
            return Err(CoreError::new(
                CoreErrorCode::UnsupportedOperation,
                format!(
                    "{kind} id must be between {FIRST_UNLOCKABLE_ICON} and {}, got {id}",
                    kind.total()
                ),
            ));
        }
        self.section_mut(UNLOCKED_ITEMS_ENTRY)?
            .insert(kind.item_key(id), Value::from(UNLOCKED));
        Ok(())
    }

    pub fn unlock_icon_kind(&mut self, kind: IconKind) -> Result<(), CoreError> {
        let items = self.section_mut(UNLOCKED_ITEMS_ENTRY)?;
        for id in FIRST_UNLOCKABLE_ICON..=kind.total() {
            items.insert(kind.item_key(id), Value::from(UNLOCKED));
        }
        Ok(())
    }

    pub fn unlock_all_icons(&mut self) -> Result<(), CoreError> {
        for kind in IconKind::ALL {
            self.unlock_icon_kind(kind)?;
        }
        Ok(())
    }

    /// A root dictionary entry, created empty if absent.
    fn section_mut(&mut self, entry: &str) -> Result<&mut Dict, CoreError> {
        self.document
            .entry(entry.to_string())
            .or_insert_with(|| Value::Dictionary(Dict::new()))
            .as_dict_mut()
            .ok_or_else(|| {
                CoreError::new(
                    CoreErrorCode::UnsupportedOperation,
                    format!("{entry} entry is not a dictionary"),
                )
            })
    }

    pub fn snapshot(&self) -> Snapshot {
        let tables = self.engine.tables;
        let doc = &self.document;
        let text = |key: &str| doc.get(key).and_then(Value::as_str).map(str::to_string);
        let number = |key: &str| doc.get(key).and_then(Value::as_i64);

        let stats = self
            .stats()
            .map(|stats| {
                tables
                    .stats
                    .pairs()
                    .filter_map(|(_, name)| {
                        let value = stats.get(name)?.as_i64()?;
                        Some(StatEntry {
                            name: name.to_string(),
                            value,
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        let collected_coin_flags = self
            .stats()
            .map(|stats| stats.keys().filter(|k| is_coin_key(k)).count())
            .unwrap_or(0);

        let levels: Vec<LevelCollectionEntry> = LEVEL_COLLECTIONS
            .iter()
            .filter_map(|&collection| {
                let records = doc.get(collection)?.as_dict()?;
                let completed = records
                    .values()
                    .filter_map(Value::as_dict)
                    .filter(|r| r.get("percentage").and_then(Value::as_i64) == Some(100))
                    .count();
                Some(LevelCollectionEntry {
                    collection: collection.to_string(),
                    count: records.len(),
                    completed,
                })
            })
            .collect();

        let unlocked_events = doc
            .get(EVENTS_ENTRY)
            .and_then(Value::as_dict)
            .map(|events| {
                tables
                    .events
                    .pairs()
                    .filter(|(_, name)| events.contains_key(*name))
                    .map(|(_, name)| name.to_string())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Snapshot {
            player_name: text("playerName"),
            player_id: number("playerID"),
            username: text("username"),
            account_id: number("accountID"),
            bootups: number("bootups"),
            stats,
            collected_coin_flags,
            levels,
            unlocked_events,
        }
    }
}
