use std::io;
use std::path::PathBuf;

use blobdoc::blob::{BlobFile, DecodeOptions, Result, Value, write_blob, write_tree};

use crate::cmd::sample::sample_mapping;
use crate::cmd::util::compression_for;

#[derive(clap::Args)]
pub struct Args {
	/// Blob path to write and read back.
	pub path: PathBuf,
	/// Compress the blob with zstd.
	#[arg(long)]
	pub zstd: bool,
}

/// Encode the sample mapping to `path`, decode it again, and print both views.
pub fn run(args: Args) -> Result<()> {
	let Args { path, zstd } = args;

	let written = write_blob(&path, &sample_mapping(), compression_for(zstd))?;
	println!("wrote: {} ({written} bytes)", path.display());

	let decoded = BlobFile::open(&path)?.decode(&DecodeOptions::default())?;

	println!();
	println!("decoded:");
	for line in listing_lines(&decoded) {
		println!("{line}");
	}
	println!("tree:");
	write_tree(&mut io::stdout().lock(), &decoded, "")?;

	Ok(())
}

/// Flat top-level listing: one key line, one value line, and a separator per entry.
pub(crate) fn listing_lines(value: &Value) -> Vec<String> {
	let Some(Value::Map(entries)) = value.resolve() else {
		return vec![format!("value: {value} ({})", value.type_name())];
	};

	let mut out = Vec::with_capacity(entries.len() * 3);
	for entry in entries {
		out.push(format!("key: {} ({})", entry.key, entry.key.type_name()));
		out.push(format!("value: {} ({})", entry.value, entry.value.type_name()));
		out.push("---".to_owned());
	}
	out
}
