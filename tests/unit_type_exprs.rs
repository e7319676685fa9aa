#![allow(missing_docs)]

use conjure_runtime::wire::{Value, WireError, decode, encode, parse_type_expr};
use serde_json::json;

fn registry() -> conjure_runtime::wire::TypeRegistry {
	conjure_fixtures::registry().expect("fixture metadata is valid")
}

#[test]
fn fixture_registry_holds_every_type() {
	let registry = registry();
	assert_eq!(registry.len(), 24);
	assert_eq!(registry.get("UnionTypeExample").map(|info| info.kind_name()), Some("union"));
	assert_eq!(registry.get("EnumExample").map(|info| info.kind_name()), Some("enum"));
}

#[test]
fn map_of_integer_lists_decodes_and_encodes() {
	let target = parse_type_expr("map<string, list<integer>>", &registry()).expect("expression parses");
	let input = json!({"a": [1, 2], "b": []});
	let value = decode(input.clone(), target).expect("map decodes");

	let map = value.as_map().expect("map value");
	assert_eq!(map.get_str("a").and_then(Value::as_list).map(<[Value]>::len), Some(2));
	assert_eq!(encode(&value).expect("map encodes"), input);
}

#[test]
fn registered_names_resolve_inside_collections() {
	let target = parse_type_expr("list<optional<StringExample>>", &registry()).expect("expression parses");
	let value = decode(json!([{"string": "a"}, null]), target).expect("list decodes");

	let items = value.as_list().expect("list value");
	assert_eq!(items[0].as_bean().map(|bean| bean.info().name), Some("StringExample"));
	assert!(items[1].is_empty());
}

#[test]
fn mismatch_inside_parsed_collection_reports_path() {
	let target = parse_type_expr("map<string, list<integer>>", &registry()).expect("expression parses");
	let err = decode(json!({"a": {"b": 1}}), target).expect_err("inner value must be a list");
	assert!(matches!(err, WireError::TypeMismatch { expected: "list", ref path, .. } if path == r#"$["a"]"#), "got {err}");
}
