//! Byte transform between the on-disk container and its plaintext.
//!
//! On disk a save is `xor(base64(gzip(plaintext)), 11)`, with `-` and `_`
//! standing in for the `+` and `/` base64 symbols.

use std::io::{Read, Write};

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tracing::{debug, warn};

use crate::error::TransportError;

pub const XOR_KEY: u8 = 11;

/// Standard alphabet; the container symbols are substituted before decoding.
/// The game is inconsistent about `=` padding, so decoding accepts either.
const CONTAINER_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes a container into its 7-bit ASCII plaintext.
pub fn decode_transport(bytes: &[u8]) -> Result<String, TransportError> {
    // Files can end in NUL or newline bytes that were never masked.
    let end = bytes
        .iter()
        .rposition(|&b| b != 0 && !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    let mut encoded: Vec<u8> = bytes[..end]
        .iter()
        .map(|&b| match b ^ XOR_KEY {
            b'-' => b'+',
            b'_' => b'/',
            other => other,
        })
        .collect();
    while encoded
        .last()
        .is_some_and(|&b| b == 0 || b.is_ascii_whitespace())
    {
        encoded.pop();
    }

    let compressed = CONTAINER_BASE64.decode(&encoded)?;

    // gzip with the default 15-bit (32 KiB) window.
    let mut raw = Vec::with_capacity(compressed.len() * 8);
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut raw)
        .map_err(TransportError::Decompress)?;

    let text = sanitize_ascii(&raw);
    debug!(
        container_len = bytes.len(),
        compressed_len = compressed.len(),
        plaintext_len = text.len(),
        "decoded transport"
    );
    Ok(text)
}

/// Encodes plaintext into a container at the zlib default compression level.
pub fn encode_transport(text: &str) -> Result<Vec<u8>, TransportError> {
    encode_transport_with(text, Compression::default())
}

pub fn encode_transport_with(text: &str, level: Compression) -> Result<Vec<u8>, TransportError> {
    let mut encoder = GzEncoder::new(Vec::new(), level);
    encoder
        .write_all(text.as_bytes())
        .map_err(TransportError::Compress)?;
    let compressed = encoder.finish().map_err(TransportError::Compress)?;

    let container: Vec<u8> = CONTAINER_BASE64
        .encode(&compressed)
        .bytes()
        .map(|b| {
            let b = match b {
                b'+' => b'-',
                b'/' => b'_',
                other => other,
            };
            b ^ XOR_KEY
        })
        .collect();
    debug!(
        plaintext_len = text.len(),
        compressed_len = compressed.len(),
        container_len = container.len(),
        "encoded transport"
    );
    Ok(container)
}

/// The plaintext format is 7-bit text: high bytes become `?` and control
/// bytes are removed.
fn sanitize_ascii(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rewritten = 0usize;
    for &b in raw {
        if b >= 0x80 {
            out.push('?');
            rewritten += 1;
        } else if b < 0x20 {
            rewritten += 1;
        } else {
            out.push(char::from(b));
        }
    }
    if rewritten > 0 {
        warn!(rewritten, "plaintext contained non-ASCII or control bytes");
    }
    out
}
