use std::io;

use blobdoc::blob::{Compression, Result};

/// Map the `--zstd` flag to a compression mode.
pub(crate) fn compression_for(zstd: bool) -> Compression {
	if zstd { Compression::Zstd } else { Compression::None }
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(io::Error::from)?;
	println!("{text}");
	Ok(())
}
