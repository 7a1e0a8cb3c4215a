//! The plaintext tagged-dictionary format.
//!
//! ```text
//! <?xml version="1.0"?><plist version="1.0" gjver="2.0"><dict>
//!   <k>GS_value</k><d><k>1</k><s>1204</s></d>
//!   <k>bootups</k><i>12</i>
//! </dict></plist>
//! ```
//!
//! Value tags: `d` dictionary, `i` integer, `r` real, `s` string,
//! `t`/`f` booleans. This is not general XML: there is no escaping.

mod lexer;
mod parser;
mod serializer;

pub use parser::parse_tag_tree;
pub use serializer::{GJ_VERSION, serialize_tag_tree};

const KEY_TAG: &str = "k";
const DICT_TAG: &str = "d";
