use std::fmt;

use crate::wire::descriptor::{BeanInfo, EnumInfo, FieldDescriptor, UNKNOWN_MEMBER, UnionInfo};
use crate::wire::{Result, WireError};

/// Native value tree produced by the decoder and consumed by the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent optional.
	Empty,
	/// Primitive, `any`, or binary payload carried as parsed JSON.
	Plain(serde_json::Value),
	/// Ordered list.
	List(Vec<Value>),
	/// Mapping with unique keys.
	Map(MapValue),
	/// Bean instance.
	Bean(BeanValue),
	/// Union instance.
	Union(UnionValue),
	/// Enum member.
	Enum(EnumValue),
}

impl Value {
	/// Short lowercase name of the value shape.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Empty => "empty",
			Self::Plain(json) => json_kind(json),
			Self::List(_) => "list",
			Self::Map(_) => "map",
			Self::Bean(_) => "bean",
			Self::Union(_) => "union",
			Self::Enum(_) => "enum",
		}
	}

	/// Whether this is an absent optional.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Borrow the passthrough JSON, if any.
	pub fn as_plain(&self) -> Option<&serde_json::Value> {
		match self {
			Self::Plain(json) => Some(json),
			_ => None,
		}
	}

	/// Borrow a passthrough string.
	pub fn as_str(&self) -> Option<&str> {
		self.as_plain().and_then(serde_json::Value::as_str)
	}

	/// Read a passthrough integer.
	pub fn as_i64(&self) -> Option<i64> {
		self.as_plain().and_then(serde_json::Value::as_i64)
	}

	/// Borrow list items.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow map entries.
	pub fn as_map(&self) -> Option<&MapValue> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}

	/// Borrow a bean.
	pub fn as_bean(&self) -> Option<&BeanValue> {
		match self {
			Self::Bean(bean) => Some(bean),
			_ => None,
		}
	}

	/// Borrow a union.
	pub fn as_union(&self) -> Option<&UnionValue> {
		match self {
			Self::Union(union) => Some(union),
			_ => None,
		}
	}

	/// Borrow an enum member.
	pub fn as_enum(&self) -> Option<&EnumValue> {
		match self {
			Self::Enum(member) => Some(member),
			_ => None,
		}
	}

	/// Unwrap a bean of the given type.
	pub fn into_bean(self, info: &'static BeanInfo) -> Result<BeanValue> {
		match self {
			Self::Bean(bean) if bean.info.name == info.name => Ok(bean),
			other => Err(native_mismatch(info.name, &other)),
		}
	}

	/// Unwrap a union of the given type.
	pub fn into_union(self, info: &'static UnionInfo) -> Result<UnionValue> {
		match self {
			Self::Union(union) if union.info.name == info.name => Ok(union),
			other => Err(native_mismatch(info.name, &other)),
		}
	}

	/// Unwrap an enum member of the given type.
	pub fn into_enum(self, info: &'static EnumInfo) -> Result<EnumValue> {
		match self {
			Self::Enum(member) if member.info.name == info.name => Ok(member),
			other => Err(native_mismatch(info.name, &other)),
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		Self::Plain(json)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => f.write_str("None"),
			Self::Plain(json) => write!(f, "{json}"),
			Self::List(items) => {
				f.write_str("[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Self::Map(map) => write!(f, "{map}"),
			Self::Bean(bean) => write!(f, "{bean}"),
			Self::Union(union) => write!(f, "{union}"),
			Self::Enum(member) => write!(f, "{member}"),
		}
	}
}

/// Mapping from decoded keys to decoded values, in first-insertion order.
///
/// Keys are not required to be hashable or ordered, so lookups scan the
/// entries. Equality is linear when both maps list their keys in the same
/// order, as two decodes of the same document do, and quadratic otherwise.
#[derive(Debug, Clone, Default)]
pub struct MapValue {
	entries: Vec<(Value, Value)>,
}

impl MapValue {
	/// Create an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty map with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: Vec::with_capacity(capacity),
		}
	}

	/// Insert an entry; an equal key keeps its position and takes the new value.
	pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
		match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.entries.push((key, value));
				None
			}
		}
	}

	/// Append an entry whose key is known not to be present yet.
	pub(crate) fn push_unique(&mut self, key: Value, value: Value) {
		self.entries.push((key, value));
	}

	/// Look up the value stored under `key`.
	pub fn get(&self, key: &Value) -> Option<&Value> {
		self.entries.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
	}

	/// Look up the value stored under a passthrough string key.
	pub fn get_str(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|(existing, _)| existing.as_str() == Some(key)).map(|(_, value)| value)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
		self.entries.iter().map(|(key, value)| (key, value))
	}
}

impl PartialEq for MapValue {
	fn eq(&self, other: &Self) -> bool {
		if self.len() != other.len() {
			return false;
		}
		self.entries == other.entries || self.entries.iter().all(|(key, value)| other.get(key) == Some(value))
	}
}

impl IntoIterator for MapValue {
	type Item = (Value, Value);
	type IntoIter = std::vec::IntoIter<(Value, Value)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl FromIterator<(Value, Value)> for MapValue {
	fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
		let mut map = Self::new();
		for (key, value) in iter {
			map.insert(key, value);
		}
		map
	}
}

impl fmt::Display for MapValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (idx, (key, value)) in self.entries.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{key}: {value}")?;
		}
		f.write_str("}")
	}
}

/// Bean instance: one value per field, in metadata order.
#[derive(Debug, Clone)]
pub struct BeanValue {
	info: &'static BeanInfo,
	slots: Vec<Value>,
}

impl BeanValue {
	/// Canonical constructor: validates arity and required slots before building.
	pub fn new(info: &'static BeanInfo, slots: Vec<Value>) -> Result<Self> {
		if slots.len() != info.fields.len() {
			return Err(WireError::SlotCount {
				type_name: info.name,
				expected: info.fields.len(),
				got: slots.len(),
			});
		}
		for ((slot, field), value) in info.fields.iter().zip(&slots) {
			if value.is_empty() && !field.is_optional() {
				return Err(WireError::MissingSlot {
					type_name: info.name,
					slot: (*slot).to_owned(),
				});
			}
		}
		Ok(Self { info, slots })
	}

	/// Build from slots whose order mirrors the metadata, as generated code does.
	///
	/// Arity is re-checked when the bean is encoded.
	pub fn from_slots(info: &'static BeanInfo, slots: Vec<Value>) -> Self {
		Self { info, slots }
	}

	/// Field metadata of this bean.
	pub fn info(&self) -> &'static BeanInfo {
		self.info
	}

	/// Borrow a slot value by member slot name.
	pub fn get(&self, slot: &str) -> Option<&Value> {
		self.info.slot_index(slot).and_then(|idx| self.slots.get(idx))
	}

	/// Move a slot value out, leaving it empty.
	pub fn take_value(&mut self, slot: &str) -> Result<Value> {
		let value = self
			.info
			.slot_index(slot)
			.and_then(|idx| self.slots.get_mut(idx))
			.ok_or_else(|| WireError::MissingSlot {
				type_name: self.info.name,
				slot: slot.to_owned(),
			})?;
		Ok(std::mem::replace(value, Value::Empty))
	}

	/// Iterate `(slot, field, value)` in metadata order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static FieldDescriptor, &Value)> {
		self.info.fields.iter().zip(&self.slots).map(|((slot, field), value)| (*slot, field, value))
	}

	pub(crate) fn slot_len(&self) -> usize {
		self.slots.len()
	}
}

impl PartialEq for BeanValue {
	fn eq(&self, other: &Self) -> bool {
		self.info.name == other.info.name && self.slots == other.slots
	}
}

impl fmt::Display for BeanValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.info.name)?;
		for (idx, (_, field, value)) in self.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}={value}", field.identifier)?;
		}
		f.write_str(")")
	}
}

/// Union instance with exactly one populated option.
#[derive(Debug, Clone)]
pub struct UnionValue {
	info: &'static UnionInfo,
	active: usize,
	value: Box<Value>,
}

impl UnionValue {
	/// Build a union with the option named `option` populated.
	pub fn new(info: &'static UnionInfo, option: &str, value: Value) -> Result<Self> {
		let active = info.option_index(option).ok_or_else(|| WireError::MissingSlot {
			type_name: info.name,
			slot: option.to_owned(),
		})?;
		Ok(Self::from_active(info, active, value))
	}

	/// Build from every option by name; exactly one must be present.
	pub fn from_options<'a, I>(info: &'static UnionInfo, options: I) -> Result<Self>
	where
		I: IntoIterator<Item = (&'a str, Option<Value>)>,
	{
		let mut populated = Vec::new();
		for (name, value) in options {
			if let Some(value) = value {
				populated.push((name, value));
			}
		}
		if populated.len() != 1 {
			return Err(WireError::InvalidUnionState {
				union_name: info.name,
				populated: populated.len(),
			});
		}
		let Some((name, value)) = populated.pop() else {
			return Err(WireError::InvalidUnionState {
				union_name: info.name,
				populated: 0,
			});
		};
		Self::new(info, name, value)
	}

	/// Build from an option position, as generated code does.
	///
	/// Debug builds assert the position; release builds leave it to the encoder,
	/// which rejects an out-of-range option with [`WireError::InvalidUnionState`].
	pub fn from_active(info: &'static UnionInfo, active: usize, value: Value) -> Self {
		debug_assert!(active < info.options.len(), "{} has no option at position {active}", info.name);
		Self {
			info,
			active,
			value: Box::new(value),
		}
	}

	/// Option metadata of this union.
	pub fn info(&self) -> &'static UnionInfo {
		self.info
	}

	/// Position of the populated option.
	pub fn active(&self) -> usize {
		self.active
	}

	/// Wire name of the populated option, as written under `type`.
	pub fn discriminant(&self) -> &'static str {
		self.info.options.get(self.active).map_or("", |(_, field)| field.identifier)
	}

	/// Native name of the populated option.
	pub fn option_name(&self) -> &'static str {
		self.info.options.get(self.active).map_or("", |(name, _)| *name)
	}

	/// Borrow the populated value.
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Borrow the value of option `name` when it is the populated one.
	pub fn get(&self, name: &str) -> Option<&Value> {
		(self.option_name() == name).then_some(&*self.value)
	}

	/// Take the populated value.
	pub fn into_value(self) -> Value {
		*self.value
	}
}

impl PartialEq for UnionValue {
	fn eq(&self, other: &Self) -> bool {
		self.info.name == other.info.name && self.active == other.active && self.value == other.value
	}
}

impl fmt::Display for UnionValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}({}={})", self.info.name, self.discriminant(), self.value)
	}
}

/// Enum member, or the sentinel for unrecognized wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member {
	/// Declared member.
	Known(&'static str),
	/// Sentinel standing in for any unrecognized value.
	Unknown,
}

/// Enum instance.
#[derive(Debug, Clone, Copy)]
pub struct EnumValue {
	info: &'static EnumInfo,
	member: Member,
}

impl EnumValue {
	/// Resolve `name` against the declared members, falling back to the sentinel.
	pub fn of(info: &'static EnumInfo, name: &str) -> Self {
		let member = info.member(name).map_or(Member::Unknown, Member::Known);
		Self { info, member }
	}

	/// The sentinel member of `info`.
	pub fn unknown(info: &'static EnumInfo) -> Self {
		Self {
			info,
			member: Member::Unknown,
		}
	}

	/// Member metadata of this enum.
	pub fn info(&self) -> &'static EnumInfo {
		self.info
	}

	/// Resolved member.
	pub fn member(&self) -> Member {
		self.member
	}

	/// Whether this is the sentinel.
	pub fn is_unknown(&self) -> bool {
		self.member == Member::Unknown
	}

	/// Wire string of the member.
	pub fn name(&self) -> &'static str {
		match self.member {
			Member::Known(name) => name,
			Member::Unknown => UNKNOWN_MEMBER,
		}
	}
}

impl PartialEq for EnumValue {
	fn eq(&self, other: &Self) -> bool {
		self.info.name == other.info.name && self.member == other.member
	}
}

impl fmt::Display for EnumValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.info.name, self.name())
	}
}

/// Short lowercase name of a JSON value's shape.
pub fn json_kind(json: &serde_json::Value) -> &'static str {
	match json {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}

fn native_mismatch(expected: &'static str, got: &Value) -> WireError {
	WireError::TypeMismatch {
		expected,
		got: got.kind(),
		path: String::new(),
	}
}
