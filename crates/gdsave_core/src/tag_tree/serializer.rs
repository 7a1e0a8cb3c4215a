use std::fmt::Write as _;

use crate::value::{Dict, Value};

use super::{DICT_TAG, KEY_TAG};

pub const GJ_VERSION: &str = "2.0";

const PROLOG: &str = r#"<?xml version="1.0"?>"#;
const FOOTER: &str = "</dict></plist>";

/// Serializes a tree into the plaintext format.
///
/// Strings are written verbatim; a string containing `<` will not parse back.
pub fn serialize_tag_tree(tree: &Dict) -> String {
    let mut out = String::with_capacity(PROLOG.len() + FOOTER.len() + 48 + tree.len() * 32);
    out.push_str(PROLOG);
    let _ = write!(out, r#"<plist version="1.0" gjver="{GJ_VERSION}"><dict>"#);
    write_dict(&mut out, tree, false);
    out.push_str(FOOTER);
    out
}

/// The root's pairs go straight into `<dict>`; nested dictionaries get `<d>`.
fn write_dict(out: &mut String, dict: &Dict, wrapped: bool) {
    if wrapped {
        let _ = write!(out, "<{DICT_TAG}>");
    }
    for (key, value) in dict {
        let _ = write!(out, "<{KEY_TAG}>{key}</{KEY_TAG}>");
        write_value(out, value);
    }
    if wrapped {
        let _ = write!(out, "</{DICT_TAG}>");
    }
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Integer(i) => {
            let _ = write!(out, "<i>{i}</i>");
        }
        Value::Real(r) => match integral(*r) {
            Some(i) => {
                let _ = write!(out, "<i>{i}</i>");
            }
            None => {
                let _ = write!(out, "<r>{r}</r>");
            }
        },
        Value::String(s) => {
            let _ = write!(out, "<s>{s}</s>");
        }
        Value::Boolean(true) => out.push_str("<t />"),
        Value::Boolean(false) => out.push_str("<f />"),
        Value::Dictionary(dict) => write_dict(out, dict, true),
    }
}

/// A real with no fractional part is written with the integer tag.
fn integral(r: f64) -> Option<i64> {
    if r.is_finite() && r.fract() == 0.0 && r >= i64::MIN as f64 && r < i64::MAX as f64 {
        Some(r as i64)
    } else {
        None
    }
}
