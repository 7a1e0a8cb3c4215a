use tracing::trace;

use crate::error::{TagTreeError, TagTreeErrorKind};
use crate::value::{Dict, Value};

use super::lexer::{Lexer, Tag, TagKind};
use super::{DICT_TAG, KEY_TAG};

/// Parses plaintext into a generic tree.
///
/// Keys and values alternate: `<k>name</k>` followed by one value element.
/// Values with an unknown tag are skipped; structural problems are errors.
pub fn parse_tag_tree(text: &str) -> Result<Dict, TagTreeError> {
    let mut lexer = Lexer::new(text);

    let plist = expect_tag(&mut lexer)?;
    if !plist.is(TagKind::Open, "plist") {
        return Err(TagTreeError::new(plist.offset, TagTreeErrorKind::MissingRoot));
    }
    let root = expect_tag(&mut lexer)?;
    if root.is(TagKind::Empty, "dict") {
        expect_close(&mut lexer, "plist")?;
        return Ok(Dict::new());
    }
    if !root.is(TagKind::Open, "dict") {
        return Err(TagTreeError::new(root.offset, TagTreeErrorKind::MissingRoot));
    }

    let tree = read_dict(&mut lexer, false)?;
    expect_close(&mut lexer, "plist")?;
    if !lexer.at_end() {
        trace!(offset = lexer.offset(), "ignoring data after </plist>");
    }
    Ok(tree)
}

/// Reads key/value pairs up to the closing tag of the enclosing dictionary.
///
/// The root's pairs sit directly inside `<dict>`; every nested dictionary is
/// wrapped in `<d>`. The caller has already consumed the opening tag.
fn read_dict(lexer: &mut Lexer<'_>, wrapped: bool) -> Result<Dict, TagTreeError> {
    let close = if wrapped { DICT_TAG } else { "dict" };
    let mut dict = Dict::new();

    loop {
        let tag = expect_tag(lexer)?;
        if tag.is(TagKind::Close, close) {
            return Ok(dict);
        }
        let key = match tag.kind {
            TagKind::Open if tag.name == KEY_TAG => read_contents(lexer, KEY_TAG)?.to_string(),
            TagKind::Empty if tag.name == KEY_TAG => String::new(),
            _ => {
                return Err(unexpected(&tag, &format!("<{KEY_TAG}> or </{close}>")));
            }
        };

        let value_tag = expect_tag(lexer)?;
        if value_tag.is(TagKind::Close, close) {
            trace!(key, "key without a value at end of dictionary");
            return Ok(dict);
        }
        if let Some(value) = read_value(lexer, &value_tag, &key)? {
            dict.insert(key, value);
        }
    }
}

fn read_value(
    lexer: &mut Lexer<'_>,
    tag: &Tag<'_>,
    key: &str,
) -> Result<Option<Value>, TagTreeError> {
    let value = match (tag.kind, tag.name) {
        (TagKind::Open, DICT_TAG) => Some(Value::Dictionary(read_dict(lexer, true)?)),
        (TagKind::Empty, DICT_TAG) => Some(Value::Dictionary(Dict::new())),
        (TagKind::Open, "s") => Some(Value::String(read_contents(lexer, "s")?.to_string())),
        (TagKind::Empty, "s") => Some(Value::String(String::new())),
        (TagKind::Open, "i") => {
            let raw = read_contents(lexer, "i")?;
            parse_number(raw, key, |s| s.parse().ok().map(Value::Integer))
        }
        (TagKind::Open, "r") => {
            let raw = read_contents(lexer, "r")?;
            parse_number(raw, key, |s| s.parse().ok().map(Value::Real))
        }
        (TagKind::Empty, "t") => Some(Value::Boolean(true)),
        (TagKind::Empty, "f") => Some(Value::Boolean(false)),
        (TagKind::Open, name @ ("t" | "f")) => {
            expect_close(lexer, name)?;
            Some(Value::Boolean(name == "t"))
        }
        (TagKind::Open, name) => {
            trace!(key, tag = name, "skipping value with unknown tag");
            skip_element(lexer, name)?;
            None
        }
        (TagKind::Empty, name) => {
            trace!(key, tag = name, "skipping value with unknown tag");
            None
        }
        (TagKind::Close, _) => return Err(unexpected(tag, "a value element")),
    };
    Ok(value)
}

fn parse_number(raw: &str, key: &str, parse: impl Fn(&str) -> Option<Value>) -> Option<Value> {
    let value = parse(raw.trim());
    if value.is_none() {
        trace!(key, raw, "skipping malformed number");
    }
    value
}

/// Character data of a leaf element followed by its closing tag.
fn read_contents<'a>(lexer: &mut Lexer<'a>, name: &str) -> Result<&'a str, TagTreeError> {
    let text = lexer.read_text();
    expect_close(lexer, name)?;
    Ok(text)
}

/// Consumes an element of unknown type, including anything nested in it.
fn skip_element(lexer: &mut Lexer<'_>, name: &str) -> Result<(), TagTreeError> {
    let mut depth = 1usize;
    while depth > 0 {
        lexer.read_text();
        let tag = expect_tag(lexer)?;
        match tag.kind {
            TagKind::Open => depth += 1,
            TagKind::Close => depth -= 1,
            TagKind::Empty => {}
        }
        if depth == 0 && tag.name != name {
            return Err(unexpected(&tag, &format!("</{name}>")));
        }
    }
    Ok(())
}

fn expect_tag<'a>(lexer: &mut Lexer<'a>) -> Result<Tag<'a>, TagTreeError> {
    lexer
        .next_tag()?
        .ok_or_else(|| TagTreeError::new(lexer.offset(), TagTreeErrorKind::UnexpectedEof))
}

fn expect_close(lexer: &mut Lexer<'_>, name: &str) -> Result<(), TagTreeError> {
    let tag = expect_tag(lexer)?;
    if tag.is(TagKind::Close, name) {
        Ok(())
    } else {
        Err(unexpected(&tag, &format!("</{name}>")))
    }
}

fn unexpected(tag: &Tag<'_>, expected: &str) -> TagTreeError {
    TagTreeError::new(
        tag.offset,
        TagTreeErrorKind::UnexpectedElement {
            expected: expected.to_string(),
            found: tag.describe(),
        },
    )
}
