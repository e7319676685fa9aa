mod convert;
mod decode;
mod descriptor;
mod encode;
mod error;
mod path;
mod registry;
#[cfg(test)]
mod test_support;
mod typeexpr;
mod value;

/// Conversions between the value tree and concrete Rust types.
pub use convert::{FromValue, ToValue};
/// Descriptor-driven decoding entry points and options.
pub use decode::{DecodeOptions, Decoder, decode, decode_as, decode_str, decode_typed, read_from_str};
/// Type metadata exposed by generated bindings.
pub use descriptor::{BINARY, BeanInfo, EnumInfo, FieldDescriptor, PRIMITIVE, TypeDescriptor, TypeInfo, TypeRef, Typed, UNION_TYPE_KEY, UNKNOWN_MEMBER, UnionInfo};
/// Shape-dispatched encoding entry points.
pub use encode::{encode, encode_typed, write_to_string};
/// Error and result aliases.
pub use error::{Result, WireError};
/// Field path parser types.
pub use path::{FieldPath, PathStep};
/// Name-indexed metadata lookup.
pub use registry::TypeRegistry;
/// Textual type expression parser.
pub use typeexpr::parse_type_expr;
/// Decoded runtime value types.
pub use value::{BeanValue, EnumValue, MapValue, Member, UnionValue, Value, json_kind};
