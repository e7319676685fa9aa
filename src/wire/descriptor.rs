use std::collections::BTreeSet;
use std::fmt;

use crate::wire::{Result, WireError};

/// Wire key carrying a union's discriminant.
pub const UNION_TYPE_KEY: &str = "type";

/// Wire literal emitted for, and decoded into, the enum sentinel member.
pub const UNKNOWN_MEMBER: &str = "UNKNOWN";

/// Shape of a wire value, used by the decoder to pick a conversion rule.
///
/// Nested descriptors are `'static` so generated metadata can live in
/// `static` items.
#[derive(Clone, Copy)]
pub enum TypeDescriptor {
	/// Boolean, integer, double, and text values; also `any`.
	Primitive,
	/// Ordered sequence of items.
	List(&'static TypeDescriptor),
	/// Object keyed by decoded keys.
	Map(&'static TypeDescriptor, &'static TypeDescriptor),
	/// Value that may be JSON `null`.
	Optional(&'static TypeDescriptor),
	/// Opaque payload handled by the transport, passed through undecoded.
	Binary,
	/// Generated bean, union, or enum.
	Reference(TypeRef),
}

/// Link from a descriptor to a generated type's metadata.
#[derive(Clone, Copy)]
pub enum TypeRef {
	/// Resolved on use through [`Typed::type_info`]; permits self-referential types.
	Lazy(fn() -> &'static TypeInfo),
	/// Metadata already at hand, e.g. looked up in a registry.
	Static(&'static TypeInfo),
}

impl TypeRef {
	/// Metadata of the referenced type.
	pub fn info(&self) -> &'static TypeInfo {
		match self {
			Self::Lazy(resolve) => resolve(),
			Self::Static(info) => info,
		}
	}
}

/// Shared descriptor for primitive passthrough values.
pub static PRIMITIVE: TypeDescriptor = TypeDescriptor::Primitive;

/// Shared descriptor for opaque binary payloads.
pub static BINARY: TypeDescriptor = TypeDescriptor::Binary;

impl TypeDescriptor {
	/// Short lowercase name of the descriptor shape.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Primitive => "primitive",
			Self::List(_) => "list",
			Self::Map(..) => "map",
			Self::Optional(_) => "optional",
			Self::Binary => "binary",
			Self::Reference(target) => target.info().kind_name(),
		}
	}

	/// Resolve a reference descriptor to its metadata.
	pub fn referenced(&self) -> Option<&'static TypeInfo> {
		match self {
			Self::Reference(target) => Some(target.info()),
			_ => None,
		}
	}
}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Primitive => f.write_str("Primitive"),
			Self::List(item) => f.debug_tuple("List").field(item).finish(),
			Self::Map(key, value) => f.debug_tuple("Map").field(key).field(value).finish(),
			Self::Optional(item) => f.debug_tuple("Optional").field(item).finish(),
			Self::Binary => f.write_str("Binary"),
			Self::Reference(target) => write!(f, "Reference({})", target.info().name()),
		}
	}
}

/// Renders the descriptor as a type expression, e.g. `map<primitive, list<StringExample>>`.
impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Primitive => f.write_str("primitive"),
			Self::List(item) => write!(f, "list<{item}>"),
			Self::Map(key, value) => write!(f, "map<{key}, {value}>"),
			Self::Optional(item) => write!(f, "optional<{item}>"),
			Self::Binary => f.write_str("binary"),
			Self::Reference(target) => f.write_str(target.info().name()),
		}
	}
}

/// Wire identifier, type, and optionality of one bean field or union option.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
	/// JSON object key.
	pub identifier: &'static str,
	/// Shape of the value stored under the key.
	pub ty: TypeDescriptor,
	/// Whether the key may be absent.
	pub optional: bool,
}

impl FieldDescriptor {
	/// Whether an absent key decodes to empty instead of failing.
	///
	/// Fields typed `optional<T>` are optional regardless of the flag.
	pub fn is_optional(&self) -> bool {
		self.optional || matches!(self.ty, TypeDescriptor::Optional(_))
	}
}

/// Field table of a generated bean.
#[derive(Debug)]
pub struct BeanInfo {
	/// Type name.
	pub name: &'static str,
	/// Member slot name and field descriptor, in declaration order.
	pub fields: &'static [(&'static str, FieldDescriptor)],
}

impl BeanInfo {
	/// Position of a member slot.
	pub fn slot_index(&self, slot: &str) -> Option<usize> {
		self.fields.iter().position(|(name, _)| *name == slot)
	}

	/// Field descriptor bound to a member slot.
	pub fn field(&self, slot: &str) -> Option<&'static FieldDescriptor> {
		self.fields.iter().find(|(name, _)| *name == slot).map(|(_, field)| field)
	}
}

/// Option table of a generated union.
#[derive(Debug)]
pub struct UnionInfo {
	/// Type name.
	pub name: &'static str,
	/// Option name and field descriptor, in declaration order.
	pub options: &'static [(&'static str, FieldDescriptor)],
}

impl UnionInfo {
	/// Position of the option whose wire identifier is `identifier`.
	pub fn option_by_identifier(&self, identifier: &str) -> Option<usize> {
		self.options.iter().position(|(_, field)| field.identifier == identifier)
	}

	/// Position of the option with native name `name`.
	pub fn option_index(&self, name: &str) -> Option<usize> {
		self.options.iter().position(|(option, _)| *option == name)
	}
}

/// Member set of a generated enum; the `UNKNOWN` sentinel is implicit.
#[derive(Debug)]
pub struct EnumInfo {
	/// Type name.
	pub name: &'static str,
	/// Declared member names, excluding the sentinel.
	pub members: &'static [&'static str],
}

impl EnumInfo {
	/// Look up a declared member, returning the static name.
	pub fn member(&self, name: &str) -> Option<&'static str> {
		self.members.iter().copied().find(|member| *member == name)
	}
}

/// Metadata exposed by every generated type.
///
/// Variants point at the generated type's own table so conversion code can
/// name the table directly.
#[derive(Debug, Clone, Copy)]
pub enum TypeInfo {
	/// Struct-like record.
	Bean(&'static BeanInfo),
	/// Tagged sum type.
	Union(&'static UnionInfo),
	/// Open enum with sentinel.
	Enum(&'static EnumInfo),
}

impl TypeInfo {
	/// Type name of the generated type.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Bean(info) => info.name,
			Self::Union(info) => info.name,
			Self::Enum(info) => info.name,
		}
	}

	/// Short lowercase kind name.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Bean(_) => "bean",
			Self::Union(_) => "union",
			Self::Enum(_) => "enum",
		}
	}

	/// Check wire invariants the generator is expected to uphold.
	pub fn validate(&self) -> Result<()> {
		match self {
			Self::Bean(info) => check_fields(info.name, info.fields, false),
			Self::Union(info) => check_fields(info.name, info.options, true),
			Self::Enum(info) => {
				let mut seen = BTreeSet::new();
				for member in info.members {
					if *member == UNKNOWN_MEMBER {
						return Err(invalid(info.name, format!("member {UNKNOWN_MEMBER} is reserved for the sentinel")));
					}
					if !seen.insert(*member) {
						return Err(invalid(info.name, format!("duplicate member {member}")));
					}
				}
				Ok(())
			}
		}
	}
}

/// Static metadata capability implemented by generated types.
pub trait Typed {
	/// Field, option, or member table of the type.
	fn type_info() -> &'static TypeInfo;

	/// Descriptor targeting this type.
	fn descriptor() -> TypeDescriptor {
		TypeDescriptor::Reference(TypeRef::Lazy(Self::type_info))
	}
}

fn check_fields(type_name: &'static str, fields: &[(&'static str, FieldDescriptor)], is_union: bool) -> Result<()> {
	let mut slots = BTreeSet::new();
	let mut identifiers = BTreeSet::new();
	for (slot, field) in fields {
		if !slots.insert(*slot) {
			return Err(invalid(type_name, format!("duplicate slot {slot}")));
		}
		if !identifiers.insert(field.identifier) {
			return Err(invalid(type_name, format!("duplicate wire identifier {}", field.identifier)));
		}
		if is_union && field.identifier == UNION_TYPE_KEY {
			return Err(invalid(type_name, format!("option {slot} uses the reserved key {UNION_TYPE_KEY}")));
		}
	}
	Ok(())
}

fn invalid(type_name: &'static str, reason: String) -> WireError {
	WireError::InvalidMetadata { type_name, reason }
}
