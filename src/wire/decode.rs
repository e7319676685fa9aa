use serde_json::{Map, Value as Json};

use crate::wire::convert::{FromValue, relocate};
use crate::wire::descriptor::{BeanInfo, EnumInfo, FieldDescriptor, TypeDescriptor, TypeInfo, Typed, UNION_TYPE_KEY, UnionInfo};
use crate::wire::path::{FieldPath, PathStep};
use crate::wire::value::{BeanValue, EnumValue, MapValue, UnionValue, json_kind};
use crate::wire::{Result, Value, WireError};

/// Runtime limits and behavior switches for descriptor-driven decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting depth of the decoded document.
	pub max_depth: u32,
	/// Reject object keys that no field or option declares.
	pub deny_unknown_fields: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			deny_unknown_fields: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects unknown object keys.
	pub fn strict() -> Self {
		Self {
			deny_unknown_fields: true,
			..Self::default()
		}
	}
}

/// Decode parsed JSON against `target` with default options.
pub fn decode(json: Json, target: &TypeDescriptor) -> Result<Value> {
	Decoder::new(&DecodeOptions::default()).decode(json, target)
}

/// Parse JSON text, then decode it against `target`.
pub fn decode_str(text: &str, target: &TypeDescriptor) -> Result<Value> {
	let json = serde_json::from_str(text)?;
	decode(json, target)
}

/// Decode parsed JSON against `target` and convert into `T`.
pub fn decode_as<T: FromValue>(json: Json, target: &TypeDescriptor) -> Result<T> {
	T::from_value(decode(json, target)?)
}

/// Decode parsed JSON into a generated type.
pub fn decode_typed<T: Typed + FromValue>(json: Json) -> Result<T> {
	decode_as(json, &T::descriptor())
}

/// Parse JSON text and decode it into a generated type.
pub fn read_from_str<T: Typed + FromValue>(text: &str) -> Result<T> {
	let json = serde_json::from_str(text)?;
	decode_typed(json)
}

/// Recursive descriptor-driven decoder.
///
/// Holds only its options and the location of the value being decoded, so a
/// fresh decoder per call keeps concurrent decodes independent.
#[derive(Debug)]
pub struct Decoder<'o> {
	options: &'o DecodeOptions,
	path: FieldPath,
	depth: u32,
}

impl<'o> Decoder<'o> {
	/// Create a decoder positioned at the document root.
	pub fn new(options: &'o DecodeOptions) -> Self {
		Self {
			options,
			path: FieldPath::root(),
			depth: 0,
		}
	}

	/// Decode `json` against `target`.
	pub fn decode(&mut self, json: Json, target: &TypeDescriptor) -> Result<Value> {
		if self.depth >= self.options.max_depth {
			return Err(WireError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}
		log::trace!("decode {} at {}", target.kind_name(), self.path);

		self.depth += 1;
		let result = self.decode_inner(json, target);
		self.depth -= 1;
		result
	}

	/// Decode `json` into a generated type.
	pub fn decode_typed<T: Typed + FromValue>(&mut self, json: Json) -> Result<T> {
		let value = self.decode(json, &T::descriptor())?;
		let location = self.path.to_string();
		T::from_value(value).map_err(|err| relocate(err, || location))
	}

	fn decode_inner(&mut self, json: Json, target: &TypeDescriptor) -> Result<Value> {
		match target {
			TypeDescriptor::Reference(target) => match target.info() {
				TypeInfo::Bean(bean) => self.decode_bean(json, *bean),
				TypeInfo::Union(union) => self.decode_union(json, *union),
				TypeInfo::Enum(members) => self.decode_enum(json, *members),
			},
			TypeDescriptor::Map(key, value) => self.decode_map(json, key, value),
			TypeDescriptor::List(item) => self.decode_list(json, item),
			TypeDescriptor::Optional(item) => match json {
				Json::Null => Ok(Value::Empty),
				other => self.decode(other, item),
			},
			TypeDescriptor::Primitive | TypeDescriptor::Binary => Ok(Value::Plain(json)),
		}
	}

	fn decode_bean(&mut self, json: Json, info: &'static BeanInfo) -> Result<Value> {
		let mut object = self.expect_object(json, info.name)?;

		for (_, field) in info.fields {
			if !field.is_optional() && !object.contains_key(field.identifier) {
				return Err(missing_field(field.identifier, &object));
			}
		}

		let mut slots = Vec::with_capacity(info.fields.len());
		for (_, field) in info.fields {
			let slot = self.decode_field(&mut object, field)?;
			slots.push(slot);
		}

		self.check_unknown(&object, info.name)?;
		BeanValue::new(info, slots).map(Value::Bean)
	}

	fn decode_union(&mut self, json: Json, info: &'static UnionInfo) -> Result<Value> {
		let mut object = self.expect_object(json, info.name)?;

		let discriminant = match object.remove(UNION_TYPE_KEY) {
			Some(Json::String(name)) => name,
			Some(other) => {
				return Err(WireError::TypeMismatch {
					expected: "string",
					got: json_kind(&other),
					path: format!("{}.{UNION_TYPE_KEY}", self.path),
				});
			}
			None => return Err(missing_field(UNION_TYPE_KEY, &object)),
		};

		let active = info.option_by_identifier(&discriminant).ok_or_else(|| WireError::UnknownVariant {
			union_name: info.name,
			variant: discriminant.clone(),
		})?;
		let (_, field) = &info.options[active];

		if !field.is_optional() && !object.contains_key(field.identifier) {
			object.insert(UNION_TYPE_KEY.to_owned(), Json::String(discriminant));
			return Err(missing_field(field.identifier, &object));
		}
		let value = self.decode_field(&mut object, field)?;

		self.check_unknown(&object, info.name)?;
		Ok(Value::Union(UnionValue::from_active(info, active, value)))
	}

	fn decode_enum(&mut self, json: Json, info: &'static EnumInfo) -> Result<Value> {
		let name = match json {
			Json::String(name) => name,
			other => return Err(self.mismatch(info.name, &other)),
		};

		let member = EnumValue::of(info, &name);
		if member.is_unknown() {
			log::debug!("unrecognized {} member {name:?} at {}, using sentinel", info.name, self.path);
		}
		Ok(Value::Enum(member))
	}

	fn decode_map(&mut self, json: Json, key_ty: &TypeDescriptor, value_ty: &TypeDescriptor) -> Result<Value> {
		let object = self.expect_object(json, "map")?;
		// Passthrough keys stay distinct strings; other key types may collapse.
		let keys_unique = matches!(key_ty, TypeDescriptor::Primitive | TypeDescriptor::Binary);

		let mut map = MapValue::with_capacity(object.len());
		for (raw_key, raw_value) in object {
			self.path.push(PathStep::Key(raw_key.clone()));
			let key = self.decode(Json::String(raw_key), key_ty);
			let entry = key.and_then(|key| self.decode(raw_value, value_ty).map(|value| (key, value)));
			self.path.pop();

			let (key, value) = entry?;
			if keys_unique {
				map.push_unique(key, value);
			} else {
				map.insert(key, value);
			}
		}
		Ok(Value::Map(map))
	}

	fn decode_list(&mut self, json: Json, item_ty: &TypeDescriptor) -> Result<Value> {
		let items = match json {
			Json::Array(items) => items,
			other => return Err(self.mismatch("list", &other)),
		};

		let mut out = Vec::with_capacity(items.len());
		for (idx, item) in items.into_iter().enumerate() {
			self.path.push(PathStep::Index(idx));
			let value = self.decode(item, item_ty);
			self.path.pop();
			out.push(value?);
		}
		Ok(Value::List(out))
	}

	fn decode_field(&mut self, object: &mut Map<String, Json>, field: &FieldDescriptor) -> Result<Value> {
		match object.remove(field.identifier) {
			Some(raw) => {
				self.path.push(PathStep::Field(field.identifier.to_owned()));
				let value = self.decode(raw, &field.ty);
				self.path.pop();
				value
			}
			None => Ok(Value::Empty),
		}
	}

	/// Keys left after every descriptor consumed its own are unknown.
	fn check_unknown(&self, rest: &Map<String, Json>, type_name: &'static str) -> Result<()> {
		if !self.options.deny_unknown_fields {
			return Ok(());
		}
		match rest.keys().next() {
			Some(field) => Err(WireError::UnknownField {
				type_name,
				field: field.clone(),
			}),
			None => Ok(()),
		}
	}

	fn expect_object(&self, json: Json, expected: &'static str) -> Result<Map<String, Json>> {
		match json {
			Json::Object(object) => Ok(object),
			other => Err(self.mismatch(expected, &other)),
		}
	}

	fn mismatch(&self, expected: &'static str, got: &Json) -> WireError {
		WireError::TypeMismatch {
			expected,
			got: json_kind(got),
			path: self.path.to_string(),
		}
	}
}

fn missing_field(field: &str, object: &Map<String, Json>) -> WireError {
	WireError::MissingField {
		field: field.to_owned(),
		object: Json::Object(object.clone()).to_string(),
	}
}
