use std::io;
use std::path::PathBuf;

use blobdoc::blob::{BlobFile, DecodeOptions, Result, write_tree};

use crate::cmd::json::NodeJson;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Blob to decode.
	pub path: PathBuf,
	/// Print the decoded value's debug form before the tree.
	#[arg(long)]
	pub raw: bool,
	/// Emit a JSON node tree instead of text.
	#[arg(long)]
	pub json: bool,
	/// Prefix for every tree line.
	#[arg(long, default_value = "")]
	pub indent: String,
	/// Override the decoder's nesting limit (at least 1).
	#[arg(long = "max-depth", value_parser = clap::value_parser!(u32).range(1..))]
	pub max_depth: Option<u32>,
}

/// Decode a blob and print its structure.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		raw,
		json,
		indent,
		max_depth,
	} = args;

	let options = decode_options(max_depth);
	let blob = BlobFile::open(&path)?;
	let value = blob.decode(&options)?;
	log::debug!("decoded {} ({} cbor bytes, root {})", path.display(), blob.bytes().len(), value.type_name());

	if json {
		let payload = InspectJson {
			path: path.display().to_string(),
			compression: blob.compression.as_str(),
			root: NodeJson::from_value(&value),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("compression: {}", blob.compression.as_str());
	if raw {
		println!("decoded: {value:?}");
	}
	println!("structure:");
	write_tree(&mut io::stdout().lock(), &value, &indent)?;

	Ok(())
}

pub(crate) fn decode_options(max_depth: Option<u32>) -> DecodeOptions {
	let mut options = DecodeOptions::for_untrusted();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}
	options
}

#[derive(serde::Serialize)]
struct InspectJson {
	path: String,
	compression: &'static str,
	root: NodeJson,
}
