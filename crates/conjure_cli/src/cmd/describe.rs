use conjure_runtime::wire::{Result, TypeDescriptor, TypeInfo, TypeRegistry, UNKNOWN_MEMBER, parse_type_expr};

/// Print the descriptor tree of `type_expr`.
pub fn run(type_expr: &str) -> Result<()> {
	let registry = conjure_fixtures::registry()?;
	println!("{}", render(type_expr, &registry)?);
	Ok(())
}

/// Render the expression followed by each referenced type's table, one level deep.
pub(crate) fn render(type_expr: &str, registry: &TypeRegistry) -> Result<String> {
	let target = parse_type_expr(type_expr, registry)?;
	let mut lines = vec![target.to_string()];

	let mut referenced = Vec::new();
	collect_referenced(target, &mut referenced);
	for info in referenced {
		lines.push(String::new());
		describe_info(info, &mut lines);
	}
	Ok(lines.join("\n"))
}

fn collect_referenced(descriptor: &TypeDescriptor, out: &mut Vec<&'static TypeInfo>) {
	match descriptor {
		TypeDescriptor::List(item) | TypeDescriptor::Optional(item) => collect_referenced(item, out),
		TypeDescriptor::Map(key, value) => {
			collect_referenced(key, out);
			collect_referenced(value, out);
		}
		TypeDescriptor::Reference(target) => {
			let info = target.info();
			if !out.iter().any(|seen| seen.name() == info.name()) {
				out.push(info);
			}
		}
		TypeDescriptor::Primitive | TypeDescriptor::Binary => {}
	}
}

fn describe_info(info: &TypeInfo, lines: &mut Vec<String>) {
	lines.push(format!("{} ({})", info.name(), info.kind_name()));
	match info {
		TypeInfo::Bean(bean) => {
			for (slot, field) in bean.fields {
				let flag = if field.is_optional() { " (optional)" } else { "" };
				lines.push(format!("  {slot} <- {}: {}{flag}", field.identifier, field.ty));
			}
		}
		TypeInfo::Union(union) => {
			for (option, field) in union.options {
				lines.push(format!("  {option} <- {}: {}", field.identifier, field.ty));
			}
		}
		TypeInfo::Enum(members) => {
			for member in members.members {
				lines.push(format!("  {member}"));
			}
			lines.push(format!("  {UNKNOWN_MEMBER} (sentinel)"));
		}
	}
}
