use crate::wire::descriptor::{BINARY, PRIMITIVE, TypeDescriptor, TypeRef};
use crate::wire::registry::TypeRegistry;
use crate::wire::{Result, WireError};

/// Scalar type names that decode as primitive passthrough.
const PRIMITIVE_NAMES: &[&str] = &[
	"string",
	"integer",
	"safelong",
	"double",
	"boolean",
	"datetime",
	"rid",
	"bearertoken",
	"uuid",
	"any",
	"primitive",
];

/// Parse a type expression such as `map<string, list<optional<StringExample>>>`.
///
/// Collection keywords are `list`, `set`, `optional`, and `map`; `binary` is
/// the opaque payload; other names are looked up in `registry`. Parsed
/// descriptors live for the rest of the process, like generated metadata.
pub fn parse_type_expr(text: &str, registry: &TypeRegistry) -> Result<&'static TypeDescriptor> {
	let mut parser = Parser { text, pos: 0, registry };
	let descriptor = parser.expr()?;
	parser.skip_ws();
	if parser.pos != text.len() {
		return Err(parser.invalid());
	}
	Ok(descriptor)
}

struct Parser<'a> {
	text: &'a str,
	pos: usize,
	registry: &'a TypeRegistry,
}

impl<'a> Parser<'a> {
	fn expr(&mut self) -> Result<&'static TypeDescriptor> {
		let name = self.ident()?;
		match name {
			"list" | "set" => {
				let [item] = self.args::<1>()?;
				Ok(intern(TypeDescriptor::List(item)))
			}
			"optional" => {
				let [item] = self.args::<1>()?;
				Ok(intern(TypeDescriptor::Optional(item)))
			}
			"map" => {
				let [key, value] = self.args::<2>()?;
				Ok(intern(TypeDescriptor::Map(key, value)))
			}
			"binary" => Ok(&BINARY),
			scalar if PRIMITIVE_NAMES.contains(&scalar) => Ok(&PRIMITIVE),
			other => {
				let info = self.registry.require(other)?;
				Ok(intern(TypeDescriptor::Reference(TypeRef::Static(info))))
			}
		}
	}

	fn args<const N: usize>(&mut self) -> Result<[&'static TypeDescriptor; N]> {
		self.expect(b'<')?;
		let mut out = [&PRIMITIVE; N];
		for (idx, slot) in out.iter_mut().enumerate() {
			if idx > 0 {
				self.expect(b',')?;
			}
			*slot = self.expr()?;
		}
		self.expect(b'>')?;
		Ok(out)
	}

	fn ident(&mut self) -> Result<&'a str> {
		self.skip_ws();
		let bytes = self.text.as_bytes();
		let start = self.pos;
		while self.pos < bytes.len() && (bytes[self.pos].is_ascii_alphanumeric() || bytes[self.pos] == b'_' || bytes[self.pos] == b'.') {
			self.pos += 1;
		}
		if self.pos == start {
			return Err(self.invalid());
		}
		Ok(&self.text[start..self.pos])
	}

	fn expect(&mut self, byte: u8) -> Result<()> {
		self.skip_ws();
		if self.text.as_bytes().get(self.pos) != Some(&byte) {
			return Err(self.invalid());
		}
		self.pos += 1;
		Ok(())
	}

	fn skip_ws(&mut self) {
		let bytes = self.text.as_bytes();
		while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
			self.pos += 1;
		}
	}

	fn invalid(&self) -> WireError {
		WireError::InvalidTypeExpr { expr: self.text.to_owned() }
	}
}

fn intern(descriptor: TypeDescriptor) -> &'static TypeDescriptor {
	Box::leak(Box::new(descriptor))
}
