use serde_json::{Map, Value as Json};

use crate::wire::convert::ToValue;
use crate::wire::descriptor::UNION_TYPE_KEY;
use crate::wire::value::{BeanValue, MapValue, UnionValue};
use crate::wire::{Result, Value, WireError};

/// Encode a native value tree into JSON, dispatching on its runtime shape.
pub fn encode(value: &Value) -> Result<Json> {
	match value {
		Value::Bean(bean) => encode_bean(bean),
		Value::Union(union) => encode_union(union),
		Value::Enum(member) => Ok(Json::String(member.name().to_owned())),
		Value::List(items) => items.iter().map(encode).collect::<Result<Vec<_>>>().map(Json::Array),
		Value::Map(map) => encode_map(map),
		Value::Plain(json) => Ok(json.clone()),
		Value::Empty => Ok(Json::Null),
	}
}

/// Encode a concrete value through its [`ToValue`] view.
pub fn encode_typed<T: ToValue + ?Sized>(value: &T) -> Result<Json> {
	encode(&value.to_value())
}

/// Encode a concrete value and write it as compact JSON text.
pub fn write_to_string<T: ToValue + ?Sized>(value: &T) -> Result<String> {
	let json = encode_typed(value)?;
	Ok(serde_json::to_string(&json)?)
}

fn encode_bean(bean: &BeanValue) -> Result<Json> {
	let info = bean.info();
	if bean.slot_len() != info.fields.len() {
		return Err(WireError::SlotCount {
			type_name: info.name,
			expected: info.fields.len(),
			got: bean.slot_len(),
		});
	}

	let mut out = Map::new();
	for (_, field, value) in bean.iter() {
		out.insert(field.identifier.to_owned(), encode(value)?);
	}
	Ok(Json::Object(out))
}

fn encode_union(union: &UnionValue) -> Result<Json> {
	let info = union.info();
	let Some((_, field)) = info.options.get(union.active()) else {
		return Err(WireError::InvalidUnionState {
			union_name: info.name,
			populated: 0,
		});
	};

	let mut out = Map::new();
	out.insert(UNION_TYPE_KEY.to_owned(), Json::String(field.identifier.to_owned()));
	out.insert(field.identifier.to_owned(), encode(union.value())?);
	Ok(Json::Object(out))
}

fn encode_map(map: &MapValue) -> Result<Json> {
	let mut out = Map::new();
	for (key, value) in map.iter() {
		let key = match encode(key)? {
			Json::String(text) => text,
			scalar @ (Json::Number(_) | Json::Bool(_)) => scalar.to_string(),
			other => return Err(WireError::UnsupportedMapKey { key: other.to_string() }),
		};
		if out.contains_key(&key) {
			return Err(WireError::DuplicateMapKey { key });
		}
		out.insert(key, encode(value)?);
	}
	Ok(Json::Object(out))
}

#[cfg(test)]
mod tests;
