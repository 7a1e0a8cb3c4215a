//! Level records found under the level collections.
//!
//! Fields `k1`..`k90` and `kI1`..`kI7` map through the level table. `kCEK`
//! maps through the item-type table and becomes `itemType`. `difficulty`,
//! `levelType` and `length` hold a 1-based index into their vocabulary.

use tracing::trace;

use crate::error::EncodeError;
use crate::keys::Tables;
use crate::value::{Dict, Value};

pub const ITEM_TYPE_KEY: &str = "kCEK";
pub const ITEM_TYPE_FIELD: &str = "itemType";

/// Root entries whose values are maps of level id to level record.
pub const LEVEL_COLLECTIONS: [&str; 4] =
    ["gauntlets", "officialLevels", "onlineLevels", "timelyLevels"];

pub fn decode_collection(value: Value, tables: &Tables) -> Value {
    let Value::Dictionary(levels) = value else {
        return value;
    };
    Value::Dictionary(
        levels
            .into_iter()
            .map(|(id, record)| match record {
                Value::Dictionary(record) => (id, Value::Dictionary(decode_record(record, tables))),
                other => (id, other),
            })
            .collect(),
    )
}

pub fn encode_collection(value: &Value, tables: &Tables) -> Result<Value, EncodeError> {
    let Value::Dictionary(levels) = value else {
        return Ok(value.clone());
    };
    let mut out = Dict::new();
    for (id, record) in levels {
        let record = match record {
            Value::Dictionary(record) => Value::Dictionary(encode_record(record, tables)?),
            other => other.clone(),
        };
        out.insert(id.clone(), record);
    }
    Ok(Value::Dictionary(out))
}

pub fn decode_record(record: Dict, tables: &Tables) -> Dict {
    let mut out = Dict::new();
    for (terse, value) in record {
        if terse == ITEM_TYPE_KEY {
            out.insert(ITEM_TYPE_FIELD.to_string(), decode_item_type(value, tables));
            continue;
        }
        let Some(field) = tables.level.readable(terse.as_str()) else {
            trace!(key = %terse, "dropping unknown level field");
            continue;
        };
        let value = match (tables.vocabulary(field), value) {
            (Some(vocabulary), Value::Integer(stored)) => vocabulary
                .decode(stored)
                .map_or(Value::Integer(stored), Value::from),
            (_, value) => value,
        };
        out.insert(field.to_string(), value);
    }
    out
}

pub fn encode_record(record: &Dict, tables: &Tables) -> Result<Dict, EncodeError> {
    let mut out = Dict::new();
    for (field, value) in record {
        if field == ITEM_TYPE_FIELD {
            out.insert(ITEM_TYPE_KEY.to_string(), encode_item_type(value, tables)?);
            continue;
        }
        let terse = tables.level.try_terse(field)?;
        let value = match (tables.vocabulary(field), value) {
            (Some(vocabulary), Value::String(name)) => Value::Integer(vocabulary.try_encode(name)?),
            (_, value) => value.clone(),
        };
        out.insert(terse.to_string(), value);
    }
    Ok(out)
}

/// Unknown codes stay as integers so the record still round-trips.
fn decode_item_type(value: Value, tables: &Tables) -> Value {
    match value {
        Value::Integer(code) => tables
            .item_types
            .readable(&code)
            .map_or(Value::Integer(code), Value::from),
        other => other,
    }
}

fn encode_item_type(value: &Value, tables: &Tables) -> Result<Value, EncodeError> {
    match value {
        Value::String(name) => Ok(Value::Integer(tables.item_types.try_terse(name)?)),
        other => Ok(other.clone()),
    }
}
