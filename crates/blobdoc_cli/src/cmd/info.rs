use std::path::PathBuf;

use blobdoc::blob::{BlobFile, Result, ValueStats};

use crate::cmd::inspect::decode_options;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Blob to summarize.
	pub path: PathBuf,
	/// Emit JSON instead of text.
	#[arg(long)]
	pub json: bool,
}

/// Print blob sizes, root type, and shape counts.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let blob = BlobFile::open(&path)?;
	let value = blob.decode(&decode_options(None))?;
	let stats = ValueStats::scan(&value);

	let payload = InfoJson {
		path: path.display().to_string(),
		compression: blob.compression.as_str(),
		stored_bytes: blob.stored_len,
		cbor_bytes: blob.bytes().len(),
		root_type: value.type_name().into_owned(),
		root_kind: value.kind(),
		leaves: stats.leaves,
		nils: stats.nils,
		maps: stats.maps,
		map_entries: stats.map_entries,
		seqs: stats.seqs,
		records: stats.records,
		hidden_fields: stats.hidden_fields,
		refs: stats.refs,
		max_depth: stats.max_depth,
	};

	if json {
		return emit_json(&payload);
	}

	println!("path: {}", payload.path);
	println!("compression: {}", payload.compression);
	println!("stored_bytes: {}", payload.stored_bytes);
	println!("cbor_bytes: {}", payload.cbor_bytes);
	println!("root_type: {} ({})", payload.root_type, payload.root_kind);
	println!("leaves: {}", payload.leaves);
	println!("nils: {}", payload.nils);
	println!("maps: {} ({} entries)", payload.maps, payload.map_entries);
	println!("seqs: {}", payload.seqs);
	println!("records: {} ({} hidden fields)", payload.records, payload.hidden_fields);
	println!("refs: {}", payload.refs);
	println!("max_depth: {}", payload.max_depth);

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	stored_bytes: usize,
	cbor_bytes: usize,
	root_type: String,
	root_kind: &'static str,
	leaves: usize,
	nils: usize,
	maps: usize,
	map_entries: usize,
	seqs: usize,
	records: usize,
	hidden_fields: usize,
	refs: usize,
	max_depth: usize,
}
