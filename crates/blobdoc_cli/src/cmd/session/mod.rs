use std::path::PathBuf;

use blobdoc::blob::{Result, write_blob};

use crate::cmd::sample::sample_session;
use crate::cmd::util::compression_for;

#[derive(clap::Args)]
pub struct Args {
	/// Output blob path.
	pub path: PathBuf,
	/// Compress the blob with zstd.
	#[arg(long)]
	pub zstd: bool,
}

/// Write the sample session blob for later inspection.
pub fn run(args: Args) -> Result<()> {
	let Args { path, zstd } = args;
	let written = write_blob(&path, &sample_session(), compression_for(zstd))?;
	println!("wrote: {} ({written} bytes)", path.display());
	Ok(())
}
