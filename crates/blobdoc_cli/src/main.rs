#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "blobdoc", about = "Dynamic binary object inspection tools")]
struct Cli {
	/// Raise log verbosity (-v info, -vv debug).
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Write the sample mapping, read it back, and print it.
	Roundtrip(cmd::roundtrip::Args),
	/// Write a sample session blob.
	Session(cmd::session::Args),
	/// Decode a blob and print its structure.
	Inspect(cmd::inspect::Args),
	/// Print blob sizes and shape statistics.
	Info(cmd::info::Args),
	/// Print a file as a hex dump.
	Dump(cmd::dump::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: u8) {
	let default_filter = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn run(command: Commands) -> blobdoc::blob::Result<()> {
	match command {
		Commands::Roundtrip(args) => cmd::roundtrip::run(args),
		Commands::Session(args) => cmd::session::run(args),
		Commands::Inspect(args) => cmd::inspect::run(args),
		Commands::Info(args) => cmd::info::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
	}
}
