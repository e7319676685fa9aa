//! Dataset catalog types, nested across modules the way a service API is.

use std::collections::BTreeMap;

use conjure_runtime::wire::{BeanInfo, BeanValue, FieldDescriptor, FromValue, Result, ToValue, TypeDescriptor, TypeInfo, TypeRef, Typed, Value};

/// Storage backend a dataset lives on.
#[derive(Debug, Clone, PartialEq)]
pub struct BackingFileSystem {
	/// `fileSystemId`
	pub file_system_id: String,
	/// `baseUri`
	pub base_uri: String,
	/// `configuration`
	pub configuration: BTreeMap<String, String>,
}

static BACKING_FILE_SYSTEM: BeanInfo = BeanInfo {
	name: "BackingFileSystem",
	fields: &[
		(
			"file_system_id",
			FieldDescriptor {
				identifier: "fileSystemId",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"base_uri",
			FieldDescriptor {
				identifier: "baseUri",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"configuration",
			FieldDescriptor {
				identifier: "configuration",
				ty: TypeDescriptor::Map(&TypeDescriptor::Primitive, &TypeDescriptor::Primitive),
				optional: false,
			},
		),
	],
};

impl Typed for BackingFileSystem {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&BACKING_FILE_SYSTEM);
		&INFO
	}
}

impl FromValue for BackingFileSystem {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&BACKING_FILE_SYSTEM)?;
		Ok(Self {
			file_system_id: bean.take("file_system_id")?,
			base_uri: bean.take("base_uri")?,
			configuration: bean.take("configuration")?,
		})
	}
}

impl ToValue for BackingFileSystem {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(
			&BACKING_FILE_SYSTEM,
			vec![self.file_system_id.to_value(), self.base_uri.to_value(), self.configuration.to_value()],
		))
	}
}

/// Dataset record.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
	/// `fileSystemId`
	pub file_system_id: String,
	/// `rid`
	pub rid: String,
}

static DATASET: BeanInfo = BeanInfo {
	name: "Dataset",
	fields: &[
		(
			"file_system_id",
			FieldDescriptor {
				identifier: "fileSystemId",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"rid",
			FieldDescriptor {
				identifier: "rid",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
	],
};

impl Typed for Dataset {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&DATASET);
		&INFO
	}
}

impl FromValue for Dataset {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&DATASET)?;
		Ok(Self {
			file_system_id: bean.take("file_system_id")?,
			rid: bean.take("rid")?,
		})
	}
}

impl ToValue for Dataset {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&DATASET, vec![self.file_system_id.to_value(), self.rid.to_value()]))
	}
}

/// Request naming the file system by id.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDatasetRequest {
	/// `fileSystemId`
	pub file_system_id: String,
	/// `path`
	pub path: String,
}

static CREATE_DATASET_REQUEST: BeanInfo = BeanInfo {
	name: "CreateDatasetRequest",
	fields: &[
		(
			"file_system_id",
			FieldDescriptor {
				identifier: "fileSystemId",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
		(
			"path",
			FieldDescriptor {
				identifier: "path",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
	],
};

impl Typed for CreateDatasetRequest {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&CREATE_DATASET_REQUEST);
		&INFO
	}
}

impl FromValue for CreateDatasetRequest {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&CREATE_DATASET_REQUEST)?;
		Ok(Self {
			file_system_id: bean.take("file_system_id")?,
			path: bean.take("path")?,
		})
	}
}

impl ToValue for CreateDatasetRequest {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(&CREATE_DATASET_REQUEST, vec![self.file_system_id.to_value(), self.path.to_value()]))
	}
}

/// Request carrying the whole file system description inline.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitCreateDatasetRequest {
	/// `backingFileSystem`
	pub backing_file_system: BackingFileSystem,
	/// `path`
	pub path: String,
}

static EXPLICIT_CREATE_DATASET_REQUEST: BeanInfo = BeanInfo {
	name: "ExplicitCreateDatasetRequest",
	fields: &[
		(
			"backing_file_system",
			FieldDescriptor {
				identifier: "backingFileSystem",
				ty: TypeDescriptor::Reference(TypeRef::Lazy(<BackingFileSystem as Typed>::type_info)),
				optional: false,
			},
		),
		(
			"path",
			FieldDescriptor {
				identifier: "path",
				ty: TypeDescriptor::Primitive,
				optional: false,
			},
		),
	],
};

impl Typed for ExplicitCreateDatasetRequest {
	fn type_info() -> &'static TypeInfo {
		static INFO: TypeInfo = TypeInfo::Bean(&EXPLICIT_CREATE_DATASET_REQUEST);
		&INFO
	}
}

impl FromValue for ExplicitCreateDatasetRequest {
	fn from_value(value: Value) -> Result<Self> {
		let mut bean = value.into_bean(&EXPLICIT_CREATE_DATASET_REQUEST)?;
		Ok(Self {
			backing_file_system: bean.take("backing_file_system")?,
			path: bean.take("path")?,
		})
	}
}

impl ToValue for ExplicitCreateDatasetRequest {
	fn to_value(&self) -> Value {
		Value::Bean(BeanValue::from_slots(
			&EXPLICIT_CREATE_DATASET_REQUEST,
			vec![self.backing_file_system.to_value(), self.path.to_value()],
		))
	}
}

pub(crate) fn type_infos() -> [&'static TypeInfo; 4] {
	[
		BackingFileSystem::type_info(),
		Dataset::type_info(),
		CreateDatasetRequest::type_info(),
		ExplicitCreateDatasetRequest::type_info(),
	]
}
