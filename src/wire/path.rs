use std::fmt;

use crate::wire::{Result, WireError};

/// One step into a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a bean field or union option by wire identifier.
	Field(String),
	/// Select an array element by zero-based index.
	Index(usize),
	/// Select a map entry by raw key.
	Key(String),
}

/// Location inside a JSON document, rendered as `$.items[2]["key"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Empty path addressing the document root.
	pub fn root() -> Self {
		Self::default()
	}

	/// Parse dotted field syntax with optional `[index]` and `["key"]` selectors.
	///
	/// A leading `$` is accepted and ignored.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || WireError::InvalidFieldPath { path: input.to_owned() };
		let body = input.strip_prefix('$').unwrap_or(input);
		let body = body.strip_prefix('.').unwrap_or(body);
		if body.is_empty() {
			return if input.starts_with('$') { Ok(Self::root()) } else { Err(invalid()) };
		}

		let bytes = body.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			if bytes[idx] != b'[' {
				let start = idx;
				while idx < bytes.len() && is_ident_byte(bytes[idx]) {
					idx += 1;
				}
				if idx == start {
					return Err(invalid());
				}
				steps.push(PathStep::Field(body[start..idx].to_owned()));
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				if idx < bytes.len() && bytes[idx] == b'"' {
					idx += 1;
					let k_start = idx;
					while idx < bytes.len() && bytes[idx] != b'"' {
						idx += 1;
					}
					if idx + 1 >= bytes.len() || bytes[idx + 1] != b']' {
						return Err(invalid());
					}
					steps.push(PathStep::Key(body[k_start..idx].to_owned()));
					idx += 2;
					continue;
				}

				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}
				let number = body[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}

	/// Append a step.
	pub fn push(&mut self, step: PathStep) {
		self.steps.push(step);
	}

	/// Remove the last step.
	pub fn pop(&mut self) -> Option<PathStep> {
		self.steps.pop()
	}

	/// Whether the path addresses the root.
	pub fn is_root(&self) -> bool {
		self.steps.is_empty()
	}

	/// Follow the path inside `json`.
	pub fn resolve<'a>(&self, json: &'a serde_json::Value) -> Option<&'a serde_json::Value> {
		self.steps.iter().try_fold(json, |current, step| match step {
			PathStep::Field(name) | PathStep::Key(name) => current.get(name.as_str()),
			PathStep::Index(index) => current.get(*index),
		})
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("$")?;
		for step in &self.steps {
			match step {
				PathStep::Field(name) => write!(f, ".{name}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
				PathStep::Key(key) => write!(f, "[{key:?}]")?,
			}
		}
		Ok(())
	}
}

fn is_ident_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}
