//! Reads and writes Geometry Dash save containers.
//!
//! Reading runs four stages: [`transport`] turns the container into plaintext,
//! [`tag_tree`] parses that into a generic [`Dict`], and [`translate`] renames
//! terse keys through the [`keys`] tables into a readable [`Document`].
//! Writing runs the same stages in reverse.

pub mod core_api;
pub mod error;
pub mod keys;
pub mod tag_tree;
pub mod transport;
pub mod translate;
pub mod value;

pub use error::{CodecError, EncodeError, Result, TagTreeError, TransportError};
pub use flate2::Compression;
pub use keys::Tables;
pub use value::{Dict, Value};

/// A save whose keys have been translated to readable names.
pub type Document = Dict;

pub fn decode(bytes: &[u8], tables: &Tables) -> Result<Document> {
    let text = transport::decode_transport(bytes)?;
    let tree = tag_tree::parse_tag_tree(&text)?;
    Ok(translate::decode_document(tree, tables))
}

pub fn encode(document: &Document, tables: &Tables) -> Result<Vec<u8>> {
    encode_with(document, tables, Compression::default())
}

pub fn encode_with(document: &Document, tables: &Tables, level: Compression) -> Result<Vec<u8>> {
    let tree = translate::encode_document(document, tables)?;
    let text = tag_tree::serialize_tag_tree(&tree);
    Ok(transport::encode_transport_with(&text, level)?)
}
