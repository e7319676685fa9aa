use std::io::Read;
use std::path::{Path, PathBuf};

use conjure_runtime::wire::{DecodeOptions, Decoder, FieldPath, Result, TypeRegistry, WireError, encode, parse_type_expr};

/// Flags of the `decode` command.
#[derive(Debug, Clone, Default)]
pub struct DecodeArgs {
	/// Target type expression.
	pub type_expr: String,
	/// Optional sub-document path.
	pub at: Option<String>,
	/// Reject unknown object keys.
	pub strict: bool,
	/// Print compact JSON.
	pub compact: bool,
	/// Print the native value tree instead of JSON.
	pub native: bool,
	/// Input file, stdin when absent or `-`.
	pub path: Option<PathBuf>,
}

/// Decode the input named by `args` and print the result.
pub fn run(args: DecodeArgs) -> Result<()> {
	let registry = conjure_fixtures::registry()?;
	let text = read_input(args.path.as_deref())?;
	println!("{}", render(&text, &args, &registry)?);
	Ok(())
}

/// Decode `text` as `args` asks and render the output.
pub(crate) fn render(text: &str, args: &DecodeArgs, registry: &TypeRegistry) -> Result<String> {
	let target = parse_type_expr(&args.type_expr, registry)?;
	let mut json: serde_json::Value = serde_json::from_str(text)?;

	if let Some(at) = &args.at {
		let path = FieldPath::parse(at)?;
		json = path
			.resolve(&json)
			.cloned()
			.ok_or_else(|| WireError::PathNotFound { path: path.to_string() })?;
	}

	let options = if args.strict { DecodeOptions::strict() } else { DecodeOptions::default() };
	let value = Decoder::new(&options).decode(json, target)?;
	log::debug!("decoded {} as {target}", value.kind());

	if args.native {
		return Ok(value.to_string());
	}

	let encoded = encode(&value)?;
	let out = if args.compact {
		serde_json::to_string(&encoded)?
	} else {
		serde_json::to_string_pretty(&encoded)?
	};
	Ok(out)
}

fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
		_ => {
			let mut text = String::new();
			std::io::stdin().read_to_string(&mut text)?;
			Ok(text)
		}
	}
}
