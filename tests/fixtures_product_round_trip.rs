#![allow(missing_docs)]

use std::collections::{BTreeMap, BTreeSet};

use conjure_fixtures::product::{
	DoubleExample, EmptyObjectExample, EnumExample, EnumFieldExample, IntegerMapExample, ManyFieldExample, PrimitiveOptionalsExample, ReservedKeyExample, StringExample,
	UnionTypeExample,
};
use conjure_runtime::wire::{FromValue, ToValue, Typed, WireError, decode_typed, encode_typed, read_from_str, write_to_string};
use conjure_testkit::{fixture_text, load_json};
use serde_json::json;

fn round_trip<T: Typed + FromValue + ToValue>(value: &T) -> T {
	let text = write_to_string(value).expect("value encodes");
	read_from_str(&text).expect("encoded text decodes")
}

#[test]
fn many_field_example_matches_fixture() {
	let decoded: ManyFieldExample = decode_typed(load_json("many_field_example.json")).expect("fixture decodes");

	assert_eq!(decoded.integer, 42);
	assert_eq!(decoded.double_value, 3.5);
	assert_eq!(decoded.optional_item.as_deref(), Some("present"));
	assert_eq!(decoded.set, BTreeSet::from(["x".to_owned(), "y".to_owned()]));
	assert_eq!(decoded.map.get("k2").map(String::as_str), Some("v2"));

	assert_eq!(encode_typed(&decoded).expect("bean encodes"), load_json("many_field_example.json"));
	assert_eq!(round_trip(&decoded), decoded);
}

#[test]
fn reserved_wire_names_bind_to_slots() {
	let decoded: ReservedKeyExample = read_from_str(&fixture_text("reserved_key_example.json")).expect("fixture decodes");
	assert_eq!(decoded.field_name_with_dashes, "dashes");
	assert_eq!(decoded.memoized_hash_code, 7);
	assert_eq!(encode_typed(&decoded).expect("bean encodes"), load_json("reserved_key_example.json"));
}

#[test]
fn absent_optionals_decode_to_none() {
	let decoded: PrimitiveOptionalsExample = read_from_str("{}").expect("all fields are optional");
	assert_eq!(decoded, PrimitiveOptionalsExample::default());

	let decoded: PrimitiveOptionalsExample = read_from_str(r#"{"num": 1.5, "rid": null}"#).expect("partial object decodes");
	assert_eq!(decoded.num, Some(1.5));
	assert_eq!(decoded.rid, None);
}

#[test]
fn empty_object_round_trips() {
	assert_eq!(encode_typed(&EmptyObjectExample {}).expect("empty bean encodes"), json!({}));
	assert_eq!(round_trip(&EmptyObjectExample {}), EmptyObjectExample {});
}

#[test]
fn doubles_keep_special_values() {
	let decoded: DoubleExample = read_from_str(r#"{"doubleValue": "NaN"}"#).expect("nan decodes");
	assert!(decoded.double_value.is_nan());

	let infinite = DoubleExample {
		double_value: f64::INFINITY,
	};
	assert_eq!(encode_typed(&infinite).expect("infinity encodes"), json!({"doubleValue": "Infinity"}));
	assert_eq!(round_trip(&infinite), infinite);
}

#[test]
fn every_union_option_round_trips() {
	let options = [
		UnionTypeExample::StringExample(StringExample { string: "s".to_owned() }),
		UnionTypeExample::Set(BTreeSet::from(["a".to_owned()])),
		UnionTypeExample::ThisFieldIsAnInteger(1),
		UnionTypeExample::AlsoAnInteger(2),
		UnionTypeExample::If(3),
		UnionTypeExample::New(4),
		UnionTypeExample::Interface(5),
	];
	for option in options {
		assert_eq!(round_trip(&option), option);
	}

	let encoded = encode_typed(&UnionTypeExample::If(3)).expect("union encodes");
	assert_eq!(encoded, json!({"type": "if", "if": 3}));
}

#[test]
fn union_decodes_nested_bean_option() {
	let decoded: UnionTypeExample = read_from_str(&fixture_text("union_string_example.json")).expect("fixture decodes");
	assert_eq!(decoded, UnionTypeExample::StringExample(StringExample { string: "inner".to_owned() }));
}

#[test]
fn unknown_enum_values_fall_back_to_sentinel() {
	let decoded: EnumFieldExample = read_from_str(&fixture_text("enum_field_example.json")).expect("fixture decodes");
	assert_eq!(decoded.enum_, EnumExample::Unknown);
	assert_eq!(decoded.counts, BTreeMap::from([(EnumExample::One, 1), (EnumExample::Two, 2)]));

	let encoded = encode_typed(&decoded).expect("bean encodes");
	assert_eq!(encoded, json!({"enum": "UNKNOWN", "counts": {"ONE": 1, "TWO": 2}}));

	let decoded: EnumFieldExample = read_from_str(r#"{"enum": "TWO"}"#).expect("counts are optional");
	assert_eq!(decoded.enum_, EnumExample::Two);
	assert!(decoded.counts.is_empty());
}

#[test]
fn conversion_errors_name_bean_slot_and_index() {
	let mut input = load_json("many_field_example.json");
	input["items"] = json!(["a", 5]);
	let err = decode_typed::<ManyFieldExample>(input).expect_err("items must be strings");
	assert!(
		matches!(err, WireError::TypeMismatch { expected: "string", got: "number", ref path } if path == "ManyFieldExample.items[1]"),
		"got {err}"
	);
}

#[test]
fn integer_map_keys_round_trip() {
	let decoded: IntegerMapExample = decode_typed(load_json("integer_map_example.json")).expect("fixture decodes");
	assert_eq!(
		decoded.items,
		BTreeMap::from([(-7, "minus seven".to_owned()), (1, "one".to_owned()), (300, "three hundred".to_owned())])
	);

	assert_eq!(encode_typed(&decoded).expect("bean encodes"), load_json("integer_map_example.json"));
	assert_eq!(round_trip(&decoded), decoded);

	let err = read_from_str::<IntegerMapExample>(r#"{"items": {"x": "not a number"}}"#).expect_err("key must be an integer");
	assert!(
		matches!(err, WireError::TypeMismatch { expected: "integer", ref path, .. } if path == r#"IntegerMapExample.items["x"]"#),
		"got {err}"
	);
}
