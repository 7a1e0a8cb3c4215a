//! Bidirectional key tables and enum vocabularies.
//!
//! Every table is built from a single forward list in [`tables`]; the inverse
//! direction is derived while building, so the two can never drift apart.

pub mod tables;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::LazyLock;

use crate::error::EncodeError;

/// The key space a table translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Root,
    Level,
    ItemType,
    Stats,
    Events,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Self::Root => "root",
            Self::Level => "level field",
            Self::ItemType => "item type",
            Self::Stats => "statistic",
            Self::Events => "event",
        })
    }
}

/// Immutable mapping between terse codes and readable names.
#[derive(Debug, Clone)]
pub struct KeyTable<C: 'static = &'static str> {
    domain: Domain,
    pairs: &'static [(C, &'static str)],
    forward: HashMap<C, &'static str>,
    inverse: HashMap<&'static str, C>,
}

impl<C> KeyTable<C>
where
    C: Copy + Eq + Hash + fmt::Debug + 'static,
{
    /// Builds a table from its forward pairs.
    ///
    /// # Panics
    /// If a code or a readable name appears twice; the table would not be
    /// invertible.
    pub fn from_pairs(domain: Domain, pairs: &'static [(C, &'static str)]) -> Self {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut inverse = HashMap::with_capacity(pairs.len());
        for &(code, readable) in pairs {
            if forward.insert(code, readable).is_some() {
                panic!("{domain} table maps code {code:?} twice");
            }
            if inverse.insert(readable, code).is_some() {
                panic!("{domain} table maps readable name `{readable}` twice");
            }
        }
        Self {
            domain,
            pairs,
            forward,
            inverse,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn readable<Q>(&self, code: &Q) -> Option<&'static str>
    where
        C: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(code).copied()
    }

    pub fn terse(&self, readable: &str) -> Option<C> {
        self.inverse.get(readable).copied()
    }

    pub fn try_terse(&self, readable: &str) -> Result<C, EncodeError> {
        self.terse(readable).ok_or_else(|| EncodeError::UnknownKey {
            domain: self.domain,
            key: readable.to_string(),
        })
    }

    /// Forward pairs in declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = (C, &'static str)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Ordered names stored on the wire as a 1-based index; index 0 is unused.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    field: &'static str,
    names: &'static [&'static str],
}

impl Vocabulary {
    pub const fn new(field: &'static str, names: &'static [&'static str]) -> Self {
        Self { field, names }
    }

    /// The readable field this vocabulary reshapes.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn decode(&self, stored: i64) -> Option<&'static str> {
        let index = usize::try_from(stored.checked_sub(1)?).ok()?;
        self.names.get(index).copied()
    }

    pub fn encode(&self, name: &str) -> Option<i64> {
        self.names
            .iter()
            .position(|&n| n == name)
            .and_then(|i| i64::try_from(i + 1).ok())
    }

    pub fn try_encode(&self, name: &str) -> Result<i64, EncodeError> {
        self.encode(name).ok_or_else(|| EncodeError::UnknownEnumValue {
            field: self.field,
            value: name.to_string(),
        })
    }
}

/// Every table the translation layer needs, built once.
#[derive(Debug, Clone)]
pub struct Tables {
    pub root: KeyTable,
    pub level: KeyTable,
    pub item_types: KeyTable<i64>,
    pub stats: KeyTable,
    pub events: KeyTable,
    pub difficulty: Vocabulary,
    pub level_type: Vocabulary,
    pub length: Vocabulary,
}

static GLOBAL: LazyLock<Tables> = LazyLock::new(Tables::new);

impl Tables {
    pub fn new() -> Self {
        Self {
            root: KeyTable::from_pairs(Domain::Root, tables::ROOT_KEYS),
            level: KeyTable::from_pairs(Domain::Level, tables::LEVEL_KEYS),
            item_types: KeyTable::from_pairs(Domain::ItemType, tables::ITEM_TYPES),
            stats: KeyTable::from_pairs(Domain::Stats, tables::STAT_KEYS),
            events: KeyTable::from_pairs(Domain::Events, tables::EVENT_KEYS),
            difficulty: Vocabulary::new("difficulty", tables::DIFFICULTIES),
            level_type: Vocabulary::new("levelType", tables::LEVEL_TYPES),
            length: Vocabulary::new("length", tables::LENGTHS),
        }
    }

    /// Process-wide tables, built on first use.
    pub fn global() -> &'static Tables {
        &GLOBAL
    }

    /// The vocabulary reshaping a readable level field, if any.
    pub fn vocabulary(&self, field: &str) -> Option<&Vocabulary> {
        [&self.difficulty, &self.level_type, &self.length]
            .into_iter()
            .find(|v| v.field == field)
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}
