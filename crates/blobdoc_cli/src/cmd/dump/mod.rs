use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

use blobdoc::blob::{BlobFile, Result};

const ROW_LEN: usize = 16;

#[derive(clap::Args)]
pub struct Args {
	/// File to dump.
	pub path: PathBuf,
	/// Dump the CBOR bytes after undoing compression.
	#[arg(long)]
	pub decompressed: bool,
}

/// Print a file as offset, hex, and ASCII rows.
pub fn run(args: Args) -> Result<()> {
	let Args { path, decompressed } = args;

	let bytes = if decompressed {
		BlobFile::open(&path)?.bytes().to_vec()
	} else {
		fs::read(&path)?
	};
	log::debug!("dumping {} ({} bytes)", path.display(), bytes.len());

	for line in dump_lines(&bytes) {
		println!("{line}");
	}
	Ok(())
}

/// One row per 16 bytes; non-printable bytes show as `.`.
pub(crate) fn dump_lines(bytes: &[u8]) -> Vec<String> {
	bytes
		.chunks(ROW_LEN)
		.enumerate()
		.map(|(row, chunk)| {
			let hex = chunk.iter().fold(String::with_capacity(ROW_LEN * 3), |mut hex, byte| {
				let _ = write!(hex, "{byte:02x} ");
				hex
			});
			let ascii: String = chunk
				.iter()
				.map(|&byte| if (32..127).contains(&byte) { byte as char } else { '.' })
				.collect();
			format!("{:08x}: {hex:<width$}| {ascii}", row * ROW_LEN, width = ROW_LEN * 3)
		})
		.collect()
}
