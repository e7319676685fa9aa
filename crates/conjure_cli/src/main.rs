#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "conjure-wire", about = "Conjure JSON wire inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a JSON document against a type expression and print it re-encoded.
	Decode {
		/// Target type expression, e.g. `map<string, list<integer>>` or `ManyFieldExample`.
		#[arg(long = "type")]
		type_expr: String,
		/// Decode only the sub-document at this path, e.g. `$.items[0]`.
		#[arg(long)]
		at: Option<String>,
		/// Reject object keys no field declares.
		#[arg(long)]
		strict: bool,
		/// Print compact JSON instead of pretty-printed.
		#[arg(long)]
		compact: bool,
		/// Print the decoded value tree instead of re-encoded JSON.
		#[arg(long)]
		native: bool,
		/// Input file; reads stdin when absent or `-`.
		path: Option<PathBuf>,
	},
	/// Print the descriptor tree of a type expression.
	Describe {
		/// Type expression to describe.
		#[arg(long = "type")]
		type_expr: String,
	},
	/// List registered types.
	Types {
		/// Emit JSON rows instead of text.
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	cmd::logging::init();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> conjure_runtime::wire::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode {
			type_expr,
			at,
			strict,
			compact,
			native,
			path,
		} => cmd::decode::run(cmd::decode::DecodeArgs {
			type_expr,
			at,
			strict,
			compact,
			native,
			path,
		}),
		Commands::Describe { type_expr } => cmd::describe::run(&type_expr),
		Commands::Types { json } => cmd::types::run(json),
	}
}
