use std::collections::BTreeMap;

use crate::wire::descriptor::{TypeInfo, Typed};
use crate::wire::{Result, WireError};

/// Name-indexed set of validated generated types.
#[derive(Debug, Default)]
pub struct TypeRegistry {
	types: BTreeMap<&'static str, &'static TypeInfo>,
}

impl TypeRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Validate and add type metadata.
	pub fn register(&mut self, info: &'static TypeInfo) -> Result<()> {
		info.validate()?;
		let name = info.name();
		if self.types.contains_key(name) {
			return Err(WireError::DuplicateType { name });
		}
		log::debug!("registered {} {name}", info.kind_name());
		self.types.insert(name, info);
		Ok(())
	}

	/// Validate and add a generated type.
	pub fn register_typed<T: Typed>(&mut self) -> Result<()> {
		self.register(T::type_info())
	}

	/// Look up metadata by type name.
	pub fn get(&self, name: &str) -> Option<&'static TypeInfo> {
		self.types.get(name).copied()
	}

	/// Look up metadata by type name, failing when absent.
	pub fn require(&self, name: &str) -> Result<&'static TypeInfo> {
		self.get(name).ok_or_else(|| WireError::UnknownType { name: name.to_owned() })
	}

	/// Number of registered types.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Whether no types are registered.
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	/// Iterate registered metadata sorted by name.
	pub fn iter(&self) -> impl Iterator<Item = &'static TypeInfo> + '_ {
		self.types.values().copied()
	}
}
