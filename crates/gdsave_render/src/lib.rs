use std::fmt::Write as _;

use gdsave_core::core_api::{LevelCollectionEntry, Snapshot, StatEntry};
use gdsave_core::{Dict, Document, Value};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

const SHEET_WIDTH: usize = 74;
const TWO_COL_WIDTH_LEFT: usize = 37;
const STAT_NAME_WIDTH: usize = 22;
const STAT_VALUE_WIDTH: usize = 12;
const COLLECTION_NAME_WIDTH: usize = 18;
const MISSING: &str = "-";

/// Converts a readable document to JSON, keeping key order.
pub fn render_json_full(document: &Document) -> JsonValue {
    JsonValue::Object(dict_to_json(document))
}

/// Builds a readable document from JSON. Integers stay integers, numbers with
/// a fraction become reals. `null` and arrays have no save representation.
pub fn document_from_json(value: JsonValue) -> Result<Document, serde_json::Error> {
    serde_json::from_value(value)
}

pub fn render_json_snapshot(snapshot: &Snapshot) -> JsonValue {
    let mut player = JsonMap::new();
    player.insert("name".to_string(), optional_text(snapshot.player_name.as_deref()));
    player.insert("player_id".to_string(), optional_number(snapshot.player_id));
    player.insert("username".to_string(), optional_text(snapshot.username.as_deref()));
    player.insert(
        "account_id".to_string(),
        optional_number(snapshot.account_id),
    );
    player.insert("bootups".to_string(), optional_number(snapshot.bootups));

    let mut stats = JsonMap::new();
    for StatEntry { name, value } in &snapshot.stats {
        stats.insert(name.clone(), JsonValue::from(*value));
    }

    let levels = snapshot
        .levels
        .iter()
        .map(|entry| {
            let mut obj = JsonMap::new();
            obj.insert(
                "collection".to_string(),
                JsonValue::String(entry.collection.clone()),
            );
            obj.insert("count".to_string(), JsonValue::from(entry.count));
            obj.insert("completed".to_string(), JsonValue::from(entry.completed));
            JsonValue::Object(obj)
        })
        .collect();

    let mut out = JsonMap::new();
    out.insert("player".to_string(), JsonValue::Object(player));
    out.insert("stats".to_string(), JsonValue::Object(stats));
    out.insert(
        "collected_coin_flags".to_string(),
        JsonValue::from(snapshot.collected_coin_flags),
    );
    out.insert("levels".to_string(), JsonValue::Array(levels));
    out.insert(
        "unlocked_events".to_string(),
        JsonValue::Array(
            snapshot
                .unlocked_events
                .iter()
                .cloned()
                .map(JsonValue::String)
                .collect(),
        ),
    );
    JsonValue::Object(out)
}

pub fn render_summary_sheet(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    writeln!(&mut out).expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "{}",
        centered_no_trailing("GEOMETRY DASH", SHEET_WIDTH)
    )
    .expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "{}",
        centered_no_trailing("SAVE SUMMARY", SHEET_WIDTH)
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    write_two_col(
        &mut out,
        &format!("Player: {}", text_or_missing(snapshot.player_name.as_deref())),
        &format!("Player ID: {}", number_or_missing(snapshot.player_id)),
    );
    write_two_col(
        &mut out,
        &format!("Username: {}", text_or_missing(snapshot.username.as_deref())),
        &format!("Account ID: {}", number_or_missing(snapshot.account_id)),
    );
    writeln!(
        &mut out,
        "  Bootups: {}",
        snapshot
            .bootups
            .map_or_else(|| MISSING.to_string(), format_number_with_commas)
    )
    .expect("writing to String cannot fail");

    write_section_header(&mut out, "Statistics");
    if snapshot.stats.is_empty() {
        writeln!(&mut out, "  none").expect("writing to String cannot fail");
    }
    for pair in snapshot.stats.chunks(2) {
        let left = format_stat(&pair[0]);
        match pair.get(1) {
            Some(right) => write_two_col(&mut out, &left, &format_stat(right)),
            None => {
                writeln!(&mut out, "  {left}").expect("writing to String cannot fail");
            }
        }
    }
    writeln!(
        &mut out,
        "  {:<STAT_NAME_WIDTH$}{:>STAT_VALUE_WIDTH$}",
        "coins collected", snapshot.collected_coin_flags
    )
    .expect("writing to String cannot fail");

    write_section_header(&mut out, "Levels");
    if snapshot.levels.is_empty() {
        writeln!(&mut out, "  none").expect("writing to String cannot fail");
    }
    for LevelCollectionEntry {
        collection,
        count,
        completed,
    } in &snapshot.levels
    {
        writeln!(
            &mut out,
            "  {collection:<COLLECTION_NAME_WIDTH$}{count:>6} saved {completed:>6} completed"
        )
        .expect("writing to String cannot fail");
    }

    write_section_header(&mut out, "Unlocked Events");
    if snapshot.unlocked_events.is_empty() {
        writeln!(&mut out, "  none").expect("writing to String cannot fail");
    }
    for pair in snapshot.unlocked_events.chunks(2) {
        match pair {
            [left, right] => write_two_col(&mut out, left, right),
            [left] => {
                writeln!(&mut out, "  {left}").expect("writing to String cannot fail");
            }
            _ => {}
        }
    }
    out
}

fn dict_to_json(dict: &Dict) -> JsonMap<String, JsonValue> {
    dict.iter()
        .map(|(key, value)| (key.clone(), value_to_json(value)))
        .collect()
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Integer(i) => JsonValue::from(*i),
        // Non-finite reals have no JSON form.
        Value::Real(r) => JsonNumber::from_f64(*r).map_or(JsonValue::Null, JsonValue::Number),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Dictionary(d) => JsonValue::Object(dict_to_json(d)),
    }
}

fn optional_text(value: Option<&str>) -> JsonValue {
    value.map_or(JsonValue::Null, JsonValue::from)
}

fn optional_number(value: Option<i64>) -> JsonValue {
    value.map_or(JsonValue::Null, JsonValue::from)
}

fn text_or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

fn number_or_missing(value: Option<i64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

fn format_stat(entry: &StatEntry) -> String {
    format!(
        "{:<STAT_NAME_WIDTH$}{:>STAT_VALUE_WIDTH$}",
        entry.name,
        format_number_with_commas(entry.value)
    )
}

fn write_two_col(out: &mut String, left: &str, right: &str) {
    writeln!(out, "  {left:<TWO_COL_WIDTH_LEFT$}{right}")
        .expect("writing to String cannot fail");
}

fn write_section_header(out: &mut String, title: &str) {
    writeln!(out).expect("writing to String cannot fail");
    writeln!(out, " ::: {title} :::").expect("writing to String cannot fail");
}

fn centered_no_trailing(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let left_padding = (width - len) / 2;
    format!("{}{}", " ".repeat(left_padding), value)
}

fn format_number_with_commas(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3 + 1);
    if n < 0 {
        result.push('-');
    }
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
