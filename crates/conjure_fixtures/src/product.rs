//! Product test types: one bean per wire primitive, collections, an enum, and a union.

use std::collections::{BTreeMap, BTreeSet};

use conjure_runtime::wire::{BeanInfo, BeanValue, EnumInfo, EnumValue, FieldDescriptor, FromValue, Member, Result, ToValue, TypeDescriptor, TypeInfo, TypeRef, Typed, UnionInfo, UnionValue, Value, WireError};

/// Alias of `string`.
pub type StringAliasExample = String;
/// Alias of `rid`.
pub type RidAliasExample = String;
/// Alias of `integer`.
pub type IntegerAliasExample = i32;
/// Alias of `map<string, any>`.
pub type MapAliasExample = BTreeMap<String, serde_json::Value>;

/// Bean with a single string field.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExample {
	/// `string`
	pub string: String,
}

static STRING_EXAMPLE: BeanInfo = BeanInfo {
	name: "StringExample",
	fields: &[(
		"string",
		FieldDescriptor {
			identifier: "string",
			ty: TypeDescriptor::Primitive,
			optional: false,
		},
	)],
};

impl Typed for StringExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&STRING_EXAMPLE);
		&INFO
	}
}

impl FromValue for StringExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&STRING_EXAMPLE)?;
		Ok(Self { string: bean.take("string")? })
	}
}

impl ToValue for StringExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&STRING_EXAMPLE, vec![self.string.to_value()]))
	}
}

/// Bean with a single integer field.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExample {
	/// `integer`
	pub integer: i32,
}

static INTEGER_EXAMPLE: BeanInfo = BeanInfo {
	name: "IntegerExample",
	fields: &[(
		"integer",
		FieldDescriptor {
			identifier: "integer",
			ty: TypeDescriptor::Primitive,
			optional: false,
		},
	)],
};

impl Typed for IntegerExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&INTEGER_EXAMPLE);
		&INFO
	}
}

impl FromValue for IntegerExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&INTEGER_EXAMPLE)?;
		Ok(Self { integer: bean.take("integer")? })
	}
}

impl ToValue for IntegerExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&INTEGER_EXAMPLE, vec![self.integer.to_value()]))
	}
}

/// Bean with a safelong field under a camelCase wire name.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeLongExample {
	/// `safeLongValue`
	pub safe_long_value: i64,
}

static SAFE_LONG_EXAMPLE: BeanInfo = BeanInfo {
	name: "SafeLongExample",
	fields: &[(
		"safe_long_value",
		FieldDescriptor {
			identifier: "safeLongValue",
			ty: TypeDescriptor::Primitive,
			optional: false,
		},
	)],
};

impl Typed for SafeLongExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&SAFE_LONG_EXAMPLE);
		&INFO
	}
}

impl FromValue for SafeLongExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&SAFE_LONG_EXAMPLE)?;
		Ok(Self {
			safe_long_value: bean.take("safe_long_value")?,
		})
	}
}

impl ToValue for SafeLongExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&SAFE_LONG_EXAMPLE, vec![self.safe_long_value.to_value()]))
	}
}

/// Bean with a double field; accepts the `NaN` and `Infinity` wire strings.
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleExample {
	/// `doubleValue`
	pub double_value: f64,
}

static DOUBLE_EXAMPLE: BeanInfo = BeanInfo {
	name: "DoubleExample",
	fields: &[(
		"double_value",
		FieldDescriptor {
			identifier: "doubleValue",
			ty: TypeDescriptor::Primitive,
			optional: false,
		},
	)],
};

impl Typed for DoubleExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&DOUBLE_EXAMPLE);
		&INFO
	}
}

impl FromValue for DoubleExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&DOUBLE_EXAMPLE)?;
		Ok(Self {
			double_value: bean.take("double_value")?,
		})
	}
}

impl ToValue for DoubleExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&DOUBLE_EXAMPLE, vec![self.double_value.to_value()]))
	}
}

/// Bean with a boolean field.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExample {
	/// `coin`
	pub coin: bool,
}

static BOOLEAN_EXAMPLE: BeanInfo = BeanInfo {
	name: "BooleanExample",
	fields: &[(
		"coin",
		FieldDescriptor {
			identifier: "coin",
			ty: TypeDescriptor::Primitive,
			optional: false,
		},
	)],
};

impl Typed for BooleanExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&BOOLEAN_EXAMPLE);
		&INFO
	}
}

impl FromValue for BooleanExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&BOOLEAN_EXAMPLE)?;
		Ok(Self { coin: bean.take("coin")? })
	}
}

impl ToValue for BooleanExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&BOOLEAN_EXAMPLE, vec![self.coin.to_value()]))
	}
}

/// Bean carrying an opaque binary payload.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExample {
	/// `binary`
	pub binary: serde_json::Value,
}

static BINARY_EXAMPLE: BeanInfo = BeanInfo {
	name: "BinaryExample",
	fields: &[(
		"binary",
		FieldDescriptor {
			identifier: "binary",
			ty: TypeDescriptor::Binary,
			optional: false,
		},
	)],
};

impl Typed for BinaryExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&BINARY_EXAMPLE);
		&INFO
	}
}

impl FromValue for BinaryExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&BINARY_EXAMPLE)?;
		Ok(Self { binary: bean.take("binary")? })
	}
}

impl ToValue for BinaryExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&BINARY_EXAMPLE, vec![self.binary.to_value()]))
	}
}

/// Bean with an `any` field holding arbitrary JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct AnyExample {
	/// `any`
	pub any: serde_json::Value,
}

static ANY_EXAMPLE: BeanInfo = BeanInfo {
	name: "AnyExample",
	fields: &[(
		"any",
		FieldDescriptor {
			identifier: "any",
			ty: TypeDescriptor::Primitive,
			optional: false,
		},
	)],
};

impl Typed for AnyExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&ANY_EXAMPLE);
		&INFO
	}
}

impl FromValue for AnyExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&ANY_EXAMPLE)?;
		Ok(Self { any: bean.take("any")? })
	}
}

impl ToValue for AnyExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&ANY_EXAMPLE, vec![self.any.to_value()]))
	}
}

/// Bean with an optional string.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalExample {
	/// `item`
	pub item: Option<String>,
}

static OPTIONAL_EXAMPLE: BeanInfo = BeanInfo {
	name: "OptionalExample",
	fields: &[(
		"item",
		FieldDescriptor {
			identifier: "item",
			ty: TypeDescriptor::Optional(&TypeDescriptor::Primitive),
			optional: false,
		},
	)],
};

impl Typed for OptionalExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&OPTIONAL_EXAMPLE);
		&INFO
	}
}

impl FromValue for OptionalExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&OPTIONAL_EXAMPLE)?;
		Ok(Self { item: bean.take("item")? })
	}
}

impl ToValue for OptionalExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&OPTIONAL_EXAMPLE, vec![self.item.to_value()]))
	}
}

/// Bean with list fields of several item types.
#[derive(Debug, Clone, PartialEq)]
pub struct ListExample {
	/// `items`
	pub items: Vec<String>,
	/// `primitiveItems`
	pub primitive_items: Vec<i32>,
	/// `doubleItems`
	pub double_items: Vec<f64>,
}

static LIST_EXAMPLE: BeanInfo = BeanInfo {
	name: "ListExample",
	fields: &[
		(
			"items",
			FieldDescriptor {
				identifier: "items",
				ty: TypeDescriptor::List(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"primitive_items",
			FieldDescriptor {
				identifier: "primitiveItems",
				ty: TypeDescriptor::List(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"double_items",
			FieldDescriptor {
				identifier: "doubleItems",
				ty: TypeDescriptor::List(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
	],
};

impl Typed for ListExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&LIST_EXAMPLE);
		&INFO
	}
}

impl FromValue for ListExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&LIST_EXAMPLE)?;
		Ok(Self {
			items: bean.take("items")?,
			primitive_items: bean.take("primitive_items")?,
			double_items: bean.take("double_items")?,
		})
	}
}

impl ToValue for ListExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(
			&LIST_EXAMPLE,
			vec![self.items.to_value(), self.primitive_items.to_value(), self.double_items.to_value()],
		))
	}
}

/// Bean with set fields; sets travel as lists.
#[derive(Debug, Clone, PartialEq)]
pub struct SetExample {
	/// `items`
	pub items: BTreeSet<String>,
	/// `doubleItems`
	pub double_items: Vec<f64>,
}

static SET_EXAMPLE: BeanInfo = BeanInfo {
	name: "SetExample",
	fields: &[
		(
			"items",
			FieldDescriptor {
				identifier: "items",
				ty: TypeDescriptor::List(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"double_items",
			FieldDescriptor {
				identifier: "doubleItems",
				ty: TypeDescriptor::List(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
	],
};

impl Typed for SetExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&SET_EXAMPLE);
		&INFO
	}
}

impl FromValue for SetExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&SET_EXAMPLE)?;
		Ok(Self {
			items: bean.take("items")?,
			double_items: bean.take("double_items")?,
		})
	}
}

impl ToValue for SetExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&SET_EXAMPLE, vec![self.items.to_value(), self.double_items.to_value()]))
	}
}

/// Bean with a string-to-string map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapExample {
	/// `items`
	pub items: BTreeMap<String, String>,
}

static MAP_EXAMPLE: BeanInfo = BeanInfo {
	name: "MapExample",
	fields: &[(
		"items",
		FieldDescriptor {
			identifier: "items",
			ty: TypeDescriptor::Map(&TypeDescriptor::Primitive, &TypeDescriptor::Primitive),
			optional: false,
		},
	)],
};

impl Typed for MapExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&MAP_EXAMPLE);
		&INFO
	}
}

impl FromValue for MapExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&MAP_EXAMPLE)?;
		Ok(Self { items: bean.take("items")? })
	}
}

impl ToValue for MapExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&MAP_EXAMPLE, vec![self.items.to_value()]))
	}
}

/// Bean with an integer-keyed map.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerMapExample {
	/// `items`
	pub items: BTreeMap<i32, String>,
}

static INTEGER_MAP_EXAMPLE: BeanInfo = BeanInfo {
	name: "IntegerMapExample",
	fields: &[(
		"items",
		FieldDescriptor {
			identifier: "items",
			ty: TypeDescriptor::Map(&TypeDescriptor::Primitive, &TypeDescriptor::Primitive),
			optional: false,
		},
	)],
};

impl Typed for IntegerMapExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&INTEGER_MAP_EXAMPLE);
		&INFO
	}
}

impl FromValue for IntegerMapExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&INTEGER_MAP_EXAMPLE)?;
		Ok(Self { items: bean.take("items")? })
	}
}

impl ToValue for IntegerMapExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&INTEGER_MAP_EXAMPLE, vec![self.items.to_value()]))
	}
}

/// Bean with a map of arbitrary JSON values.
#[derive(Debug, Clone, PartialEq)]
pub struct AnyMapExample {
	/// `items`
	pub items: MapAliasExample,
}

static ANY_MAP_EXAMPLE: BeanInfo = BeanInfo {
	name: "AnyMapExample",
	fields: &[(
		"items",
		FieldDescriptor {
			identifier: "items",
			ty: TypeDescriptor::Map(&TypeDescriptor::Primitive, &TypeDescriptor::Primitive),
			optional: false,
		},
	)],
};

impl Typed for AnyMapExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&ANY_MAP_EXAMPLE);
		&INFO
	}
}

impl FromValue for AnyMapExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&ANY_MAP_EXAMPLE)?;
		Ok(Self { items: bean.take("items")? })
	}
}

impl ToValue for AnyMapExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&ANY_MAP_EXAMPLE, vec![self.items.to_value()]))
	}
}

/// Bean whose fields are all optional primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveOptionalsExample {
	/// `num`
	pub num: Option<f64>,
	/// `bool`
	pub bool: Option<bool>,
	/// `integer`
	pub integer: Option<i32>,
	/// `safelong`
	pub safelong: Option<i64>,
	/// `rid`
	pub rid: Option<RidAliasExample>,
}

static PRIMITIVE_OPTIONALS_EXAMPLE: BeanInfo = BeanInfo {
	name: "PrimitiveOptionalsExample",
	fields: &[
		(
			"num",
			FieldDescriptor {
				identifier: "num",
				ty: TypeDescriptor::Optional(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"bool",
			FieldDescriptor {
				identifier: "bool",
				ty: TypeDescriptor::Optional(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"integer",
			FieldDescriptor {
				identifier: "integer",
				ty: TypeDescriptor::Optional(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"safelong",
			FieldDescriptor {
				identifier: "safelong",
				ty: TypeDescriptor::Optional(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"rid",
			FieldDescriptor {
				identifier: "rid",
				ty: TypeDescriptor::Optional(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
	],
};

impl Typed for PrimitiveOptionalsExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&PRIMITIVE_OPTIONALS_EXAMPLE);
		&INFO
	}
}

impl FromValue for PrimitiveOptionalsExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&PRIMITIVE_OPTIONALS_EXAMPLE)?;
		Ok(Self {
			num: bean.take("num")?,
			bool: bean.take("bool")?,
			integer: bean.take("integer")?,
			safelong: bean.take("safelong")?,
			rid: bean.take("rid")?,
		})
	}
}

impl ToValue for PrimitiveOptionalsExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(
			&PRIMITIVE_OPTIONALS_EXAMPLE,
			vec![
				self.num.to_value(),
				self.bool.to_value(),
				self.integer.to_value(),
				self.safelong.to_value(),
				self.rid.to_value(),
			],
		))
	}
}

/// Bean mixing every field shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ManyFieldExample {
	/// `string`
	pub string: String,
	/// `integer`
	pub integer: i32,
	/// `doubleValue`
	pub double_value: f64,
	/// `optionalItem`
	pub optional_item: Option<String>,
	/// `items`
	pub items: Vec<String>,
	/// `set`
	pub set: BTreeSet<String>,
	/// `map`
	pub map: BTreeMap<String, String>,
	/// `alias`
	pub alias: StringAliasExample,
}

static MANY_FIELD_EXAMPLE: BeanInfo = BeanInfo {
	name: "ManyFieldExample",
	fields: &[
		(
			"string",
			FieldDescriptor {
				identifier: "string",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"integer",
			FieldDescriptor {
				identifier: "integer",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"double_value",
			FieldDescriptor {
				identifier: "doubleValue",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"optional_item",
			FieldDescriptor {
				identifier: "optionalItem",
				ty: TypeDescriptor::Optional(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"items",
			FieldDescriptor {
				identifier: "items",
				ty: TypeDescriptor::List(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"set",
			FieldDescriptor {
				identifier: "set",
				ty: TypeDescriptor::List(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"map",
			FieldDescriptor {
				identifier: "map",
				ty: TypeDescriptor::Map(&TypeDescriptor::Primitive, &TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"alias",
			FieldDescriptor {
				identifier: "alias",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
	],
};

impl Typed for ManyFieldExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&MANY_FIELD_EXAMPLE);
		&INFO
	}
}

impl FromValue for ManyFieldExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&MANY_FIELD_EXAMPLE)?;
		Ok(Self {
			string: bean.take("string")?,
			integer: bean.take("integer")?,
			double_value: bean.take("double_value")?,
			optional_item: bean.take("optional_item")?,
			items: bean.take("items")?,
			set: bean.take("set")?,
			map: bean.take("map")?,
			alias: bean.take("alias")?,
		})
	}
}

impl ToValue for ManyFieldExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(
			&MANY_FIELD_EXAMPLE,
			vec![
				self.string.to_value(),
				self.integer.to_value(),
				self.double_value.to_value(),
				self.optional_item.to_value(),
				self.items.to_value(),
				self.set.to_value(),
				self.map.to_value(),
				self.alias.to_value(),
			],
		))
	}
}

/// Bean without fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmptyObjectExample {}

static EMPTY_OBJECT_EXAMPLE: BeanInfo = BeanInfo {
	name: "EmptyObjectExample",
	fields: &[],
};

impl Typed for EmptyObjectExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&EMPTY_OBJECT_EXAMPLE);
		&INFO
	}
}

impl FromValue for EmptyObjectExample {
	fn from_value(value: Value) -> Result<Self> {
		value.into_bean(&EMPTY_OBJECT_EXAMPLE)?;
		Ok(Self {})
	}
}

impl ToValue for EmptyObjectExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&EMPTY_OBJECT_EXAMPLE, Vec::new()))
	}
}

/// Bean whose wire names are keywords or not valid identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservedKeyExample {
	/// `package`
	pub package: String,
	/// `interface`
	pub interface: String,
	/// `field-name-with-dashes`
	pub field_name_with_dashes: String,
	/// `memoizedHashCode`
	pub memoized_hash_code: i32,
}

static RESERVED_KEY_EXAMPLE: BeanInfo = BeanInfo {
	name: "ReservedKeyExample",
	fields: &[
		(
			"package",
			FieldDescriptor {
				identifier: "package",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"interface",
			FieldDescriptor {
				identifier: "interface",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"field_name_with_dashes",
			FieldDescriptor {
				identifier: "field-name-with-dashes",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"memoized_hash_code",
			FieldDescriptor {
				identifier: "memoizedHashCode",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
	],
};

impl Typed for ReservedKeyExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&RESERVED_KEY_EXAMPLE);
		&INFO
	}
}

impl FromValue for ReservedKeyExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&RESERVED_KEY_EXAMPLE)?;
		Ok(Self {
			package: bean.take("package")?,
			interface: bean.take("interface")?,
			field_name_with_dashes: bean.take("field_name_with_dashes")?,
			memoized_hash_code: bean.take("memoized_hash_code")?,
		})
	}
}

impl ToValue for ReservedKeyExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(
			&RESERVED_KEY_EXAMPLE,
			vec![
				self.package.to_value(),
				self.interface.to_value(),
				self.field_name_with_dashes.to_value(),
				self.memoized_hash_code.to_value(),
			],
		))
	}
}

/// Open enum; unrecognized wire strings decode to [`EnumExample::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumExample {
	/// `ONE`
	One,
	/// `TWO`
	Two,
	/// Sentinel for values this build does not know.
	Unknown,
}

static ENUM_EXAMPLE: EnumInfo = EnumInfo {
	name: "EnumExample",
	members: &["ONE", "TWO"],
};

impl Typed for EnumExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Enum(&ENUM_EXAMPLE);
		&INFO
	}
}

impl FromValue for EnumExample {
	fn from_value(value: Value) -> Result<Self> {
		let member = value.into_enum(&ENUM_EXAMPLE)?;
		Ok(match member.member() {
			Member::Known("ONE") => Self::One,
			Member::Known("TWO") => Self::Two,
			Member::Known(_) | Member::Unknown => Self::Unknown,
		})
	}
}

impl ToValue for EnumExample {
	fn to_value(&self) -> Value {
		let member = match self {
			Self::One => EnumValue::of(&ENUM_EXAMPLE, "ONE"),
			Self::Two => EnumValue::of(&ENUM_EXAMPLE, "TWO"),
			Self::Unknown => EnumValue::unknown(&ENUM_EXAMPLE),
		};
		Value::Enum(member)
	}
}

/// Bean holding an enum field and a map keyed by the enum.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumFieldExample {
	/// `enum`
	pub enum_: EnumExample,
	/// `counts`
	pub counts: BTreeMap<EnumExample, i32>,
}

static ENUM_FIELD_EXAMPLE: BeanInfo = BeanInfo {
	name: "EnumFieldExample",
	fields: &[
		(
			"enum_",
			FieldDescriptor {
				identifier: "enum",
				ty: TypeDescriptor::Reference(TypeRef::Lazy(<EnumExample as Typed>::type_info)),
				optional: false,
			},
		),
		(
			"counts",
			FieldDescriptor {
				identifier: "counts",
				ty: TypeDescriptor::Map(&TypeDescriptor::Reference(TypeRef::Lazy(<EnumExample as Typed>::type_info)), &TypeDescriptor::Primitive),
				optional: true,
			},
		),
	],
};

impl Typed for EnumFieldExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&ENUM_FIELD_EXAMPLE);
		&INFO
	}
}

impl FromValue for EnumFieldExample {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&ENUM_FIELD_EXAMPLE)?;
		let counts: Option<BTreeMap<EnumExample, i32>> = bean.take("counts")?;
		Ok(Self {
			enum_: bean.take("enum_")?,
			counts: counts.unwrap_or_default(),
		})
	}
}

impl ToValue for EnumFieldExample {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&ENUM_FIELD_EXAMPLE, vec![self.enum_.to_value(), self.counts.to_value()]))
	}
}

/// Union whose option names collide with keywords.
#[derive(Debug, Clone, PartialEq)]
pub enum UnionTypeExample {
	/// `stringExample`
	StringExample(StringExample),
	/// `set`
	Set(BTreeSet<String>),
	/// `thisFieldIsAnInteger`
	ThisFieldIsAnInteger(i32),
	/// `alsoAnInteger`
	AlsoAnInteger(i32),
	/// `if`
	If(i32),
	/// `new`
	New(i32),
	/// `interface`
	Interface(i32),
}

static UNION_TYPE_EXAMPLE: UnionInfo = UnionInfo {
	name: "UnionTypeExample",
	options: &[
		(
			"string_example",
			FieldDescriptor {
				identifier: "stringExample",
				ty: TypeDescriptor::Reference(TypeRef::Lazy(<StringExample as Typed>::type_info)),
				optional: false,
			},
		),
		(
			"set",
			FieldDescriptor {
				identifier: "set",
				ty: TypeDescriptor::List(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
		(
			"this_field_is_an_integer",
			FieldDescriptor {
				identifier: "thisFieldIsAnInteger",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"also_an_integer",
			FieldDescriptor {
				identifier: "alsoAnInteger",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"if_",
			FieldDescriptor {
				identifier: "if",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"new",
			FieldDescriptor {
				identifier: "new",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"interface",
			FieldDescriptor {
				identifier: "interface",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
	],
};

impl Typed for UnionTypeExample {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Union(&UNION_TYPE_EXAMPLE);
		&INFO
	}
}

impl FromValue for UnionTypeExample {
	fn from_value(value: Value) -> Result<Self> {
		let union = value.into_union(&UNION_TYPE_EXAMPLE)?;
		match union.option_name() {
			"string_example" => union.take().map(Self::StringExample),
			"set" => union.take().map(Self::Set),
			"this_field_is_an_integer" => union.take().map(Self::ThisFieldIsAnInteger),
			"also_an_integer" => union.take().map(Self::AlsoAnInteger),
			"if_" => union.take().map(Self::If),
			"new" => union.take().map(Self::New),
			"interface" => union.take().map(Self::Interface),
			other => Err(WireError::MissingSlot {
				type_name: UNION_TYPE_EXAMPLE.name,
				slot: other.to_owned(),
			}),
		}
	}
}

impl ToValue for UnionTypeExample {
	fn to_value(&self) -> Value {
		let (active, value) = match self {
			Self::StringExample(value) => (0, value.to_value()),
			Self::Set(value) => (1, value.to_value()),
			Self::ThisFieldIsAnInteger(value) => (2, value.to_value()),
			Self::AlsoAnInteger(value) => (3, value.to_value()),
			Self::If(value) => (4, value.to_value()),
			Self::New(value) => (5, value.to_value()),
			Self::Interface(value) => (6, value.to_value()),
		};
		Value::Union(UnionValue::from_active(&UNION_TYPE_EXAMPLE, active, value))
	}
}

/// Every product type, for registration.
pub(crate) fn type_infos() -> [&'static TypeInfo; 20] {
	[
		StringExample::type_info(),
		IntegerExample::type_info(),
		SafeLongExample::type_info(),
		DoubleExample::type_info(),
		BooleanExample::type_info(),
		BinaryExample::type_info(),
		AnyExample::type_info(),
		OptionalExample::type_info(),
		ListExample::type_info(),
		SetExample::type_info(),
		MapExample::type_info(),
		IntegerMapExample::type_info(),
		AnyMapExample::type_info(),
		PrimitiveOptionalsExample::type_info(),
		ManyFieldExample::type_info(),
		EmptyObjectExample::type_info(),
		ReservedKeyExample::type_info(),
		EnumExample::type_info(),
		EnumFieldExample::type_info(),
		UnionTypeExample::type_info(),
	]
}
