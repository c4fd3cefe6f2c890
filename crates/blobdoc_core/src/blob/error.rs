use std::convert::Infallible;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BlobError>;

/// Errors produced while reading, decoding, encoding, and writing blobs.
#[derive(Debug, Error)]
pub enum BlobError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed CBOR input.
	#[error("cbor decode: {0}")]
	Decode(#[from] minicbor::decode::Error),
	/// CBOR encoder rejected a value.
	#[error("cbor encode: {0}")]
	Encode(#[from] minicbor::encode::Error<Infallible>),
	/// Blob contained no data.
	#[error("empty blob")]
	EmptyBlob,
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Bytes remained after the root value was decoded.
	#[error("trailing data after root value at offset {at}: {rem} bytes")]
	TrailingData {
		/// Offset where the root value ended.
		at: usize,
		/// Unconsumed bytes.
		rem: usize,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DecodeDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Declared container length exceeded configured limit.
	#[error("decode container too large at offset {at}: len={len}, max={max}")]
	DecodeContainerTooLarge {
		/// Offset of the container header.
		at: usize,
		/// Declared element count.
		len: u64,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Indefinite-length arrays and maps are not accepted.
	#[error("indefinite-length {kind} at offset {at} is not supported")]
	IndefiniteContainer {
		/// Container kind (`array` or `map`).
		kind: &'static str,
		/// Offset of the container header.
		at: usize,
	},
	/// CBOR item kind has no value counterpart.
	#[error("unsupported cbor item {kind} at offset {at}")]
	UnsupportedItem {
		/// Debug rendering of the CBOR item type.
		kind: String,
		/// Offset of the item.
		at: usize,
	},
	/// Integer does not fit in 64 bits.
	#[error("integer out of range at offset {at}")]
	IntegerOutOfRange {
		/// Offset of the integer.
		at: usize,
	},
	/// Tagged record payload did not have the expected layout.
	#[error("malformed record at offset {at}: {reason}")]
	MalformedRecord {
		/// Offset of the record tag.
		at: usize,
		/// What was wrong with the payload.
		reason: &'static str,
	},
}
