use std::fs;
use std::path::Path;

use crate::blob::compression::{compress_bytes, decode_bytes};
use crate::blob::{Compression, DecodeOptions, Result, Value, decode_value, encode_value};

/// Opened blob with decompressed bytes.
pub struct BlobFile {
	/// Compression mode detected for source bytes.
	pub compression: Compression,
	/// Size of the file on disk.
	pub stored_len: usize,
	bytes: Vec<u8>,
}

impl BlobFile {
	/// Read a blob from disk and undo any compression.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Wrap in-memory blob bytes, undoing any compression.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let stored_len = raw.len();
		let (compression, bytes) = decode_bytes(raw)?;
		Ok(Self {
			compression,
			stored_len,
			bytes,
		})
	}

	/// Return decompressed CBOR bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Decode the root value.
	pub fn decode(&self, opt: &DecodeOptions) -> Result<Value> {
		decode_value(&self.bytes, opt)
	}
}

/// Encode `value`, apply `compression`, and write it to `path`. Returns bytes written.
pub fn write_blob(path: impl AsRef<Path>, value: &Value, compression: Compression) -> Result<usize> {
	let path = path.as_ref();
	let encoded = encode_value(value)?;
	let encoded_len = encoded.len();
	let bytes = compress_bytes(encoded, compression)?;
	fs::write(path, &bytes)?;
	log::info!(
		"wrote {} ({} bytes, {} encoded, compression={})",
		path.display(),
		bytes.len(),
		encoded_len,
		compression.as_str()
	);
	Ok(bytes.len())
}
