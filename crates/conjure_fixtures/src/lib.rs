//! Hand-written stand-ins for code generator output, used to exercise the wire runtime.

use conjure_runtime::wire::{Result, TypeRegistry};

/// Dataset catalog service types.
pub mod catalog;
/// Product test types covering every wire shape.
pub mod product;

/// Registry holding every fixture type.
pub fn registry() -> Result<TypeRegistry> {
	let mut registry = TypeRegistry::new();
	for info in product::type_infos().into_iter().chain(catalog::type_infos()) {
		registry.register(info)?;
	}
	Ok(registry)
}
