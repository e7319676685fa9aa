//! Hand-built metadata shared by the unit tests.

use crate::wire::{BeanInfo, BeanValue, EnumInfo, FieldDescriptor, FromValue, Result, ToValue, TypeDescriptor, TypeInfo, TypeRef, Typed, UnionInfo, Value};

pub(crate) static POINT: BeanInfo = BeanInfo {
	name: "Point",
	fields: &[
		(
			"x",
			FieldDescriptor {
				identifier: "x",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"label",
			FieldDescriptor {
				identifier: "labelText",
				ty: TypeDescriptor::Optional(&TypeDescriptor::Primitive),
				optional: false,
			},
		),
	],
};
pub(crate) static POINT_INFO: TypeInfo = TypeInfo::Bean(&POINT);
pub(crate) static POINT_REF: TypeDescriptor = TypeDescriptor::Reference(TypeRef::Static(&POINT_INFO));

pub(crate) static SHAPE: UnionInfo = UnionInfo {
	name: "Shape",
	options: &[
		(
			"string_example",
			FieldDescriptor {
				identifier: "stringExample",
				ty: TypeDescriptor::Primitive,
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
			"number",
			FieldDescriptor {
				identifier: "number",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
	],
};
pub(crate) static SHAPE_INFO: TypeInfo = TypeInfo::Union(&SHAPE);
pub(crate) static SHAPE_REF: TypeDescriptor = TypeDescriptor::Reference(TypeRef::Static(&SHAPE_INFO));

pub(crate) static COLOR: EnumInfo = EnumInfo {
	name: "Color",
	members: &["RED", "GREEN"],
};
pub(crate) static COLOR_INFO: TypeInfo = TypeInfo::Enum(&COLOR);
pub(crate) static COLOR_REF: TypeDescriptor = TypeDescriptor::Reference(TypeRef::Static(&COLOR_INFO));

/// Self-referential bean, linked lazily.
pub(crate) static NODE: BeanInfo = BeanInfo {
	name: "Node",
	fields: &[(
		"children",
		FieldDescriptor {
			identifier: "children",
			ty: TypeDescriptor::List(&TypeDescriptor::Reference(TypeRef::Lazy(node_info))),
			optional: false,
		},
	)],
};
pub(crate) static NODE_INFO: TypeInfo = TypeInfo::Bean(&NODE);

pub(crate) fn node_info() -> &'static TypeInfo {
	&NODE_INFO
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Point {
	pub x: i64,
	pub label: Option<String>,
}

impl Typed for Point {
	fn type_info() -> &'static TypeInfo {
		&POINT_INFO
	}
}

impl FromValue for Point {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&POINT)?;
		Ok(Self {
			x: bean.take("x")?,
			label: bean.take("label")?,
		})
	}
}

impl ToValue for Point {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&POINT, vec![self.x.to_value(), self.label.to_value()]))
	}
}

pub(crate) fn parse_json(text: &str) -> serde_json::Value {
	serde_json::from_str(text).expect("test json parses")
}
