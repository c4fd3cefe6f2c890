mod compression;
mod decode;
mod encode;
mod error;
mod file;
mod print;
mod stats;
mod value;

/// Compression detection and framing helpers.
pub use compression::{Compression, ZSTD_MAGIC, compress_bytes, decode_bytes};
/// CBOR decoding entry points and options.
pub use decode::{DecodeOptions, decode_value};
/// CBOR encoding entry point.
pub use encode::{RECORD_TAG, REF_TAG, encode_value};
/// Error and result aliases.
pub use error::{BlobError, Result};
/// File abstraction and blob writer.
pub use file::{BlobFile, write_blob};
/// Structural tree printer.
pub use print::{DESCENT_UNIT, LABEL_UNIT, render_lines, write_tree};
/// Shape statistics over a value tree.
pub use stats::ValueStats;
/// Decoded runtime value types.
pub use value::{FieldValue, MapEntry, RecordValue, Value};
