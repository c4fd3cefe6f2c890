//! Public library API for decoding dynamically typed binary blobs and printing their structure.

/// Value model, CBOR codec, compression, file IO, and the structural printer.
pub mod blob;
