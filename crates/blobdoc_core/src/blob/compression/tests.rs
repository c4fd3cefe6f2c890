use crate::blob::{BlobError, Compression, ZSTD_MAGIC, compress_bytes, decode_bytes};

#[test]
fn raw_bytes_pass_through() {
	let (mode, out) = decode_bytes(vec![0xa1, 0x61, 0x61, 0x01]).expect("raw decode");
	assert_eq!(mode, Compression::None);
	assert_eq!(out, vec![0xa1, 0x61, 0x61, 0x01]);
}

#[test]
fn zstd_frames_are_detected_and_inflated() {
	let payload = vec![0x82, 0x01, 0x02];
	let packed = compress_bytes(payload.clone(), Compression::Zstd).expect("compress");
	assert!(packed.starts_with(&ZSTD_MAGIC));

	let (mode, out) = decode_bytes(packed).expect("zstd decode");
	assert_eq!(mode, Compression::Zstd);
	assert_eq!(out, payload);
}

#[test]
fn empty_input_is_rejected() {
	assert!(matches!(decode_bytes(Vec::new()), Err(BlobError::EmptyBlob)));
}

#[test]
fn labels_are_stable() {
	assert_eq!(Compression::None.as_str(), "none");
	assert_eq!(Compression::Zstd.as_str(), "zstd");
}
