//! Conversions between the native [`Value`] tree and concrete Rust types.
//!
//! Generated beans, unions, and enums implement [`FromValue`] and [`ToValue`]
//! themselves; this module covers the standard library types their slots use.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Number, Value as Json};

use crate::wire::value::{BeanValue, MapValue, UnionValue};
use crate::wire::{Result, Value, WireError};

/// Build a concrete value out of a decoded [`Value`].
pub trait FromValue: Sized {
	/// Convert, failing with [`WireError::TypeMismatch`] on a shape mismatch.
	fn from_value(value: Value) -> Result<Self>;
}

/// Produce the [`Value`] the encoder walks.
pub trait ToValue {
	/// Convert into the native value tree.
	fn to_value(&self) -> Value;
}

impl BeanValue {
	/// Move a slot out and convert it, naming the slot on failure.
	pub fn take<T: FromValue>(&mut self, slot: &str) -> Result<T> {
		let type_name = self.info().name;
		let value = self.take_value(slot)?;
		T::from_value(value).map_err(|err| relocate(err, || format!("{type_name}.{slot}")))
	}
}

impl UnionValue {
	/// Convert the populated value, naming the option on failure.
	pub fn take<T: FromValue>(self) -> Result<T> {
		let location = format!("{}.{}", self.info().name, self.option_name());
		T::from_value(self.into_value()).map_err(|err| relocate(err, || location))
	}
}

/// Prefix the location of a conversion error; index-only paths are extended.
pub(crate) fn relocate(err: WireError, location: impl FnOnce() -> String) -> WireError {
	match err {
		WireError::TypeMismatch { expected, got, path } if path.is_empty() || path.starts_with('[') => WireError::TypeMismatch {
			expected,
			got,
			path: format!("{}{path}", location()),
		},
		other => other,
	}
}

fn mismatch(expected: &'static str, value: &Value) -> WireError {
	WireError::TypeMismatch {
		expected,
		got: value.kind(),
		path: String::new(),
	}
}

impl FromValue for Value {
	fn from_value(value: Value) -> Result<Self> {
		Ok(value)
	}
}

impl ToValue for Value {
	fn to_value(&self) -> Value {
		self.clone()
	}
}

impl FromValue for bool {
	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Plain(Json::Bool(flag)) => Ok(flag),
			other => Err(mismatch("boolean", &other)),
		}
	}
}

impl ToValue for bool {
	fn to_value(&self) -> Value {
		Value::Plain(Json::Bool(*self))
	}
}

impl FromValue for i64 {
	fn from_value(value: Value) -> Result<Self> {
		match &value {
			Value::Plain(Json::Number(number)) => number.as_i64().ok_or_else(|| mismatch("integer", &value)),
			_ => Err(mismatch("integer", &value)),
		}
	}
}

impl ToValue for i64 {
	fn to_value(&self) -> Value {
		Value::Plain(Json::Number(Number::from(*self)))
	}
}

impl FromValue for i32 {
	fn from_value(value: Value) -> Result<Self> {
		let wide = match &value {
			Value::Plain(Json::Number(number)) => number.as_i64(),
			_ => None,
		};
		wide.and_then(|item| i32::try_from(item).ok()).ok_or_else(|| mismatch("integer", &value))
	}
}

impl ToValue for i32 {
	fn to_value(&self) -> Value {
		Value::Plain(Json::Number(Number::from(*self)))
	}
}

/// Doubles also accept the `"NaN"`, `"Infinity"`, and `"-Infinity"` wire strings.
impl FromValue for f64 {
	fn from_value(value: Value) -> Result<Self> {
		match &value {
			Value::Plain(Json::Number(number)) => number.as_f64().ok_or_else(|| mismatch("double", &value)),
			Value::Plain(Json::String(text)) => match text.as_str() {
				"NaN" => Ok(f64::NAN),
				"Infinity" => Ok(f64::INFINITY),
				"-Infinity" => Ok(f64::NEG_INFINITY),
				_ => Err(mismatch("double", &value)),
			},
			_ => Err(mismatch("double", &value)),
		}
	}
}

impl ToValue for f64 {
	fn to_value(&self) -> Value {
		match Number::from_f64(*self) {
			Some(number) => Value::Plain(Json::Number(number)),
			None if self.is_nan() => Value::Plain(Json::String("NaN".to_owned())),
			None if *self > 0.0 => Value::Plain(Json::String("Infinity".to_owned())),
			None => Value::Plain(Json::String("-Infinity".to_owned())),
		}
	}
}

impl FromValue for String {
	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Plain(Json::String(text)) => Ok(text),
			other => Err(mismatch("string", &other)),
		}
	}
}

impl ToValue for String {
	fn to_value(&self) -> Value {
		Value::Plain(Json::String(self.clone()))
	}
}

impl ToValue for str {
	fn to_value(&self) -> Value {
		Value::Plain(Json::String(self.to_owned()))
	}
}

/// `any` and `binary` slots keep the wire JSON as is.
impl FromValue for Json {
	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Plain(json) => Ok(json),
			Value::Empty => Ok(Json::Null),
			other => Err(mismatch("json", &other)),
		}
	}
}

impl ToValue for Json {
	fn to_value(&self) -> Value {
		Value::Plain(self.clone())
	}
}

impl<T: FromValue> FromValue for Option<T> {
	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Empty | Value::Plain(Json::Null) => Ok(None),
			other => T::from_value(other).map(Some),
		}
	}
}

impl<T: ToValue> ToValue for Option<T> {
	fn to_value(&self) -> Value {
		match self {
			Some(item) => item.to_value(),
			None => Value::Empty,
		}
	}
}

impl<T: FromValue> FromValue for Box<T> {
	fn from_value(value: Value) -> Result<Self> {
		T::from_value(value).map(Box::new)
	}
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
	fn to_value(&self) -> Value {
		(**self).to_value()
	}
}

impl<T: FromValue> FromValue for Vec<T> {
	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::List(items) => items
				.into_iter()
				.enumerate()
				.map(|(idx, item)| T::from_value(item).map_err(|err| relocate(err, || format!("[{idx}]"))))
				.collect(),
			other => Err(mismatch("list", &other)),
		}
	}
}

impl<T: ToValue> ToValue for Vec<T> {
	fn to_value(&self) -> Value {
		Value::List(self.iter().map(ToValue::to_value).collect())
	}
}

/// Sets travel as lists; duplicates collapse.
impl<T: FromValue + Ord> FromValue for BTreeSet<T> {
	fn from_value(value: Value) -> Result<Self> {
		Vec::<T>::from_value(value).map(|items| items.into_iter().collect())
	}
}

impl<T: ToValue> ToValue for BTreeSet<T> {
	fn to_value(&self) -> Value {
		Value::List(self.iter().map(ToValue::to_value).collect())
	}
}

impl<K: FromValue + Ord, V: FromValue> FromValue for BTreeMap<K, V> {
	fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Map(map) => {
				let mut out = BTreeMap::new();
				for (key, value) in map {
					let location = key.to_string();
					let key = key_from_value::<K>(key).map_err(|err| relocate(err, || format!("[{location}]")))?;
					let value = V::from_value(value).map_err(|err| relocate(err, || format!("[{location}]")))?;
					out.insert(key, value);
				}
				Ok(out)
			}
			other => Err(mismatch("map", &other)),
		}
	}
}

/// Object keys arrive as strings; number and boolean keys are read back from their text.
fn key_from_value<K: FromValue>(key: Value) -> Result<K> {
	let Value::Plain(Json::String(text)) = &key else {
		return K::from_value(key);
	};
	match serde_json::from_str::<Json>(text) {
		Ok(scalar @ (Json::Number(_) | Json::Bool(_))) => K::from_value(Value::Plain(scalar)).or_else(|_| K::from_value(key)),
		_ => K::from_value(key),
	}
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
	fn to_value(&self) -> Value {
		let mut map = MapValue::with_capacity(self.len());
		for (key, value) in self {
			map.push_unique(key.to_value(), value.to_value());
		}
		Value::Map(map)
	}
}

#[cfg(test)]
mod tests;
