//! The `unlockValueKeeper` entry: `ugv_<code>` flags for story events.

use tracing::trace;

use crate::error::EncodeError;
use crate::keys::Tables;
use crate::value::{Dict, Value};

const EVENT_KEY_PREFIX: &str = "ugv_";

pub fn decode(value: Value, tables: &Tables) -> Value {
    let Value::Dictionary(events) = value else {
        return value;
    };
    let mut out = Dict::new();
    for (key, value) in events {
        let name = key
            .strip_prefix(EVENT_KEY_PREFIX)
            .and_then(|code| tables.events.readable(code));
        match name {
            Some(name) => {
                out.insert(name.to_string(), value);
            }
            None => trace!(key = %key, "dropping unknown event"),
        }
    }
    Value::Dictionary(out)
}

pub fn encode(value: &Value, tables: &Tables) -> Result<Value, EncodeError> {
    let Value::Dictionary(events) = value else {
        return Ok(value.clone());
    };
    let mut out = Dict::new();
    for (name, value) in events {
        let code = tables.events.try_terse(name)?;
        out.insert(format!("{EVENT_KEY_PREFIX}{code}"), value.clone());
    }
    Ok(Value::Dictionary(out))
}
