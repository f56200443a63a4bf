// this_file: crates/fontembed-core/src/lib.rs

//! Font assets for SVG embedding.
//!
//! Two independent build steps over one `output/` directory:
//!
//! - [`data_uri`] turns each subsetted `.woff2` font into a single-line
//!   `data:` URI text file;
//! - [`glyphs`] lists the code points each subset has to cover, as input
//!   for the external subsetting tool.
//!
//! [`verify`] checks both kinds of artifacts against their sources and
//! [`css`] renders the `@font-face` rule that consumes a data URI.

pub mod css;
pub mod data_uri;
pub mod error;
pub mod glyphs;
pub mod layout;
pub mod subset;
pub mod verify;

pub use css::{font_face_rule, subset_font_face_rule};
pub use data_uri::{
    decode_data_uri, encode_data_uri, encode_font_file, encode_subset, EncodeReport,
    DATA_URI_PREFIX,
};
pub use error::{DataUriError, FontEmbedError, LabelError, Result};
pub use glyphs::{
    code_point_label, glyph_list, glyph_set, parse_code_point_label, write_glyph_list,
    write_subset_glyphs, GlyphReport,
};
pub use layout::{AssetLayout, OUTPUT_DIR};
pub use subset::Subset;
pub use verify::{verify_subset, Mismatch, MismatchKind};

#[cfg(test)]
mod proptests;
