use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors produced while decoding, encoding, and describing wire values.
#[derive(Debug, Error)]
pub enum WireError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON text could not be parsed or written.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Required wire key was absent from a bean or union object.
	#[error("field {field} not found in object {object}")]
	MissingField {
		/// Wire identifier of the missing field.
		field: String,
		/// Rendered JSON object that lacked the field.
		object: String,
	},
	/// JSON shape or native value did not match the expected kind.
	#[error("type mismatch at {path}: expected {expected}, got {got}")]
	TypeMismatch {
		/// Expected logical kind.
		expected: &'static str,
		/// Actual kind that was found.
		got: &'static str,
		/// Location of the offending value.
		path: String,
	},
	/// Union was built with zero or several populated options.
	#[error("a union must contain a single member: {union_name} has {populated} populated options")]
	InvalidUnionState {
		/// Union type name.
		union_name: &'static str,
		/// Number of options that carried a value.
		populated: usize,
	},
	/// Union `type` discriminant named an option the union does not declare.
	#[error("union {union_name} has no option {variant:?}")]
	UnknownVariant {
		/// Union type name.
		union_name: &'static str,
		/// Discriminant found on the wire.
		variant: String,
	},
	/// Object key without a field descriptor, rejected in strict mode.
	#[error("unknown field {field:?} on {type_name}")]
	UnknownField {
		/// Bean or union type name.
		type_name: &'static str,
		/// Offending wire key.
		field: String,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Constructor asked for a member slot the bean does not declare.
	#[error("{type_name} has no slot {slot}")]
	MissingSlot {
		/// Bean or union type name.
		type_name: &'static str,
		/// Requested member slot name.
		slot: String,
	},
	/// Slot list length did not match the bean's field metadata.
	#[error("{type_name} expects {expected} slots, got {got}")]
	SlotCount {
		/// Bean type name.
		type_name: &'static str,
		/// Number of declared fields.
		expected: usize,
		/// Number of supplied slot values.
		got: usize,
	},
	/// Map key encoded to a JSON value that cannot be an object key.
	#[error("map key must encode to a string, number or boolean, got {key}")]
	UnsupportedMapKey {
		/// Rendered encoded key.
		key: String,
	},
	/// Two distinct map keys encoded to the same object key.
	#[error("map keys collide on object key {key:?}")]
	DuplicateMapKey {
		/// Shared object key.
		key: String,
	},
	/// Generated metadata violated a wire invariant.
	#[error("invalid metadata for {type_name}: {reason}")]
	InvalidMetadata {
		/// Offending type name.
		type_name: &'static str,
		/// Violated invariant.
		reason: String,
	},
	/// Two registered types share a name.
	#[error("duplicate type name: {name}")]
	DuplicateType {
		/// Conflicting type name.
		name: &'static str,
	},
	/// Type expression referenced a name that is not registered.
	#[error("unknown type: {name}")]
	UnknownType {
		/// Requested type name.
		name: String,
	},
	/// Type expression syntax is invalid.
	#[error("invalid type expression: {expr}")]
	InvalidTypeExpr {
		/// User-provided expression.
		expr: String,
	},
	/// Path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// User-provided path string.
		path: String,
	},
	/// Path did not resolve inside the JSON document.
	#[error("path not found: {path}")]
	PathNotFound {
		/// Path that failed to resolve.
		path: String,
	},
}
