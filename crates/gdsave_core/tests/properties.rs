use gdsave_core::translate::{EVENTS_ENTRY, LEVEL_COLLECTIONS, STATS_ENTRY};
use gdsave_core::transport::{decode_transport, encode_transport};
use gdsave_core::{Dict, Tables, Value, decode, encode};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e9f64..1.0e9)
            .prop_filter("fractional part", |r| r.fract() != 0.0)
            .prop_map(Value::Real),
        "[a-zA-Z0-9 ._,-]{0,24}".prop_map(Value::String),
    ]
}

fn plain_value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(2, 16, 4, |inner| {
        prop::collection::btree_map("[a-zA-Z0-9_]{1,8}", inner, 0..4).prop_map(Value::Dictionary)
    })
}

fn plain_root_names() -> Vec<&'static str> {
    Tables::global()
        .root
        .pairs()
        .map(|(_, name)| name)
        .filter(|name| {
            *name != STATS_ENTRY && *name != EVENTS_ENTRY && !LEVEL_COLLECTIONS.contains(name)
        })
        .collect()
}

fn stats() -> impl Strategy<Value = Value> {
    let names: Vec<&'static str> = Tables::global().stats.pairs().map(|(_, n)| n).collect();
    (
        prop::collection::btree_map(prop::sample::select(names), "[0-9]{1,6}", 0..6),
        prop::collection::btree_set("unique_[0-9]{1,6}_[1-3]", 0..3),
    )
        .prop_map(|(named, coins)| {
            let mut stats: Dict = named
                .into_iter()
                .map(|(k, v)| (k.to_string(), Value::String(v)))
                .collect();
            for coin in coins {
                stats.insert(coin, Value::from("1"));
            }
            Value::Dictionary(stats)
        })
}

fn level_record() -> impl Strategy<Value = Value> {
    let tables = Tables::global();
    let fields: Vec<&'static str> = tables
        .level
        .pairs()
        .map(|(_, n)| n)
        .filter(|n| tables.vocabulary(n).is_none())
        .collect();
    let item_types: Vec<&'static str> = tables.item_types.pairs().map(|(_, n)| n).collect();
    (
        prop::collection::btree_map(prop::sample::select(fields), scalar(), 0..6),
        prop::option::of(prop::sample::select(item_types)),
        prop::option::of(prop::sample::select(tables.difficulty.names())),
        prop::option::of(prop::sample::select(tables.length.names())),
    )
        .prop_map(|(fields, item_type, difficulty, length)| {
            let mut record: Dict = fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
            if let Some(item_type) = item_type {
                record.insert("itemType".to_string(), Value::from(item_type));
            }
            if let Some(difficulty) = difficulty {
                record.insert("difficulty".to_string(), Value::from(difficulty));
            }
            if let Some(length) = length {
                record.insert("length".to_string(), Value::from(length));
            }
            Value::Dictionary(record)
        })
}

fn events() -> impl Strategy<Value = Value> {
    let names: Vec<&'static str> = Tables::global().events.pairs().map(|(_, n)| n).collect();
    prop::collection::btree_map(prop::sample::select(names), "[01]", 0..5).prop_map(|events| {
        Value::Dictionary(
            events
                .into_iter()
                .map(|(k, v)| (k.to_string(), Value::String(v)))
                .collect(),
        )
    })
}

fn document() -> impl Strategy<Value = Dict> {
    (
        prop::collection::btree_map(prop::sample::select(plain_root_names()), plain_value(), 0..6),
        prop::option::of(stats()),
        prop::collection::btree_map("[0-9]{1,7}", level_record(), 0..3),
        prop::option::of(events()),
    )
        .prop_map(|(plain, stats, levels, events)| {
            let mut doc: Dict = plain
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
            if let Some(stats) = stats {
                doc.insert(STATS_ENTRY.to_string(), stats);
            }
            if !levels.is_empty() {
                doc.insert("onlineLevels".to_string(), Value::Dictionary(levels));
            }
            if let Some(events) = events {
                doc.insert(EVENTS_ENTRY.to_string(), events);
            }
            doc
        })
}

proptest! {
    #[test]
    fn transport_round_trips_printable_ascii(text in "[ -~]{0,256}") {
        let container = encode_transport(&text).expect("encode");
        prop_assert_eq!(decode_transport(&container).expect("decode"), text);
    }

    #[test]
    fn document_round_trips(doc in document()) {
        let tables = Tables::global();
        let bytes = encode(&doc, tables).expect("encode");
        prop_assert_eq!(decode(&bytes, tables).expect("decode"), doc);
    }

    #[test]
    fn enum_offset_law(index in 0usize..4) {
        let tables = Tables::global();
        for vocabulary in [&tables.difficulty, &tables.level_type, &tables.length] {
            let names = vocabulary.names();
            let name = names[index % names.len()];
            let stored = vocabulary.encode(name).expect("known name");
            prop_assert_eq!(vocabulary.decode(stored), Some(name));
            prop_assert_eq!(vocabulary.encode(names[0]), Some(1));
        }
    }
}
