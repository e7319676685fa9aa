use conjure_runtime::wire::{Result, TypeInfo, TypeRegistry};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TypeRow {
	name: &'static str,
	kind: &'static str,
	members: usize,
}

/// List registered types as text or JSON.
pub fn run(json: bool) -> Result<()> {
	let registry = conjure_fixtures::registry()?;
	println!("{}", render(&registry, json)?);
	Ok(())
}

pub(crate) fn render(registry: &TypeRegistry, json: bool) -> Result<String> {
	let rows: Vec<TypeRow> = registry.iter().map(row).collect();
	if json {
		return Ok(serde_json::to_string_pretty(&rows)?);
	}

	let lines: Vec<String> = rows.iter().map(|row| format!("{:<6} {:<28} {}", row.kind, row.name, row.members)).collect();
	Ok(lines.join("\n"))
}

fn row(info: &'static TypeInfo) -> TypeRow {
	let members = match info {
		TypeInfo::Bean(bean) => bean.fields.len(),
		TypeInfo::Union(union) => union.options.len(),
		TypeInfo::Enum(members) => members.members.len(),
	};
	TypeRow {
		name: info.name(),
		kind: info.kind_name(),
		members,
	}
}
