//! The `stats` entry: numeric codes `1`..`22` plus per-coin flags.

use tracing::trace;

use crate::error::EncodeError;
use crate::keys::Tables;
use crate::value::{Dict, Value};

const COIN_KEY_PREFIX: &str = "unique_";

/// `unique_<levelId>_<coinIndex>`: collected-coin flags, kept verbatim.
pub fn is_coin_key(key: &str) -> bool {
    let Some(rest) = key.strip_prefix(COIN_KEY_PREFIX) else {
        return false;
    };
    let Some((level, coin)) = rest.split_once('_') else {
        return false;
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(level) && digits(coin)
}

pub fn decode(value: Value, tables: &Tables) -> Value {
    let Value::Dictionary(stats) = value else {
        return value;
    };
    let mut out = Dict::new();
    for (code, value) in stats {
        if is_coin_key(&code) {
            out.insert(code, value);
            continue;
        }
        match tables.stats.readable(code.as_str()) {
            Some(name) => {
                out.insert(name.to_string(), value);
            }
            None => trace!(key = %code, "dropping unknown statistic"),
        }
    }
    Value::Dictionary(out)
}

pub fn encode(value: &Value, tables: &Tables) -> Result<Value, EncodeError> {
    let Value::Dictionary(stats) = value else {
        return Ok(value.clone());
    };
    let mut out = Dict::new();
    for (name, value) in stats {
        let key = if is_coin_key(name) {
            name.clone()
        } else {
            tables.stats.try_terse(name)?.to_string()
        };
        out.insert(key, value.clone());
    }
    Ok(Value::Dictionary(out))
}
