// this_file: crates/fontembed-core/src/data_uri.rs

//! Font encoder: subset fonts as single-line `data:` URIs.
//!
//! The URI goes straight into an SVG `@font-face` rule, so the output is
//! the fixed prefix followed by standard padded base64, with no line
//! breaks and no trailing newline.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{DataUriError, Result};
use crate::layout::{read_bytes, write_string, AssetLayout};
use crate::subset::Subset;

/// MIME type and encoding declaration placed before the payload
pub const DATA_URI_PREFIX: &str = "data:font/woff2;utf-8;base64,";

/// What a single encoding step read and wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeReport {
    pub input: Utf8PathBuf,
    pub output: Utf8PathBuf,
    /// Size of the font file
    pub font_bytes: usize,
    /// Length of the written URI, prefix included
    pub uri_len: usize,
}

/// Encode raw font bytes as a data URI.
pub fn encode_data_uri(bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    BASE64.encode_string(bytes, &mut uri);
    uri
}

/// Recover the font bytes from a data URI produced by [`encode_data_uri`].
///
/// Surrounding whitespace is ignored so a file edited by hand still decodes.
pub fn decode_data_uri(uri: &str) -> std::result::Result<Vec<u8>, DataUriError> {
    let payload = uri
        .trim()
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or(DataUriError::MissingPrefix {
            expected: DATA_URI_PREFIX,
        })?;
    Ok(BASE64.decode(payload)?)
}

/// Read `input`, encode it and overwrite `output` with the URI.
pub fn encode_font_file(input: &Utf8Path, output: &Utf8Path) -> Result<EncodeReport> {
    let bytes = read_bytes(input)?;
    let uri = encode_data_uri(&bytes);
    write_string(output, &uri)?;

    Ok(EncodeReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        font_bytes: bytes.len(),
        uri_len: uri.len(),
    })
}

/// Encode one subset's font according to `layout`.
pub fn encode_subset(layout: &AssetLayout, subset: Subset) -> Result<EncodeReport> {
    let report = encode_font_file(&layout.font_path(subset), &layout.data_uri_path(subset))?;
    log::info!(
        "{}: encoded {} font bytes into {} URI bytes",
        subset,
        report.font_bytes,
        report.uri_len
    );
    Ok(report)
}
