mod shapes {
	use serde_json::json;

	use crate::wire::test_support::{COLOR, POINT, POINT_REF, Point, SHAPE, SHAPE_REF, parse_json};
	use crate::wire::{BeanValue, EnumValue, UnionValue, Value, WireError, decode, encode, encode_typed};

	#[test]
	fn bean_uses_wire_identifiers_and_null_for_empty() {
		let bean = BeanValue::from_slots(&POINT, vec![Value::Plain(json!(1)), Value::Empty]);
		let encoded = encode(&Value::Bean(bean)).expect("bean encodes");
		assert_eq!(encoded, json!({"x": 1, "labelText": null}));
	}

	#[test]
	fn union_writes_discriminant_and_active_value() {
		let union = UnionValue::new(&SHAPE, "number", Value::Plain(json!(5))).expect("option exists");
		let encoded = encode(&Value::Union(union)).expect("union encodes");
		assert_eq!(encoded, json!({"type": "number", "number": 5}));

		let union = UnionValue::new(&SHAPE, "string_example", Value::Plain(json!("hi"))).expect("option exists");
		let encoded = encode(&Value::Union(union)).expect("union encodes");
		assert_eq!(encoded, json!({"type": "stringExample", "stringExample": "hi"}));
	}

	#[test]
	fn enum_sentinel_emits_unknown_literal() {
		assert_eq!(encode(&Value::Enum(EnumValue::of(&COLOR, "RED"))).expect("enum encodes"), json!("RED"));
		assert_eq!(encode(&Value::Enum(EnumValue::unknown(&COLOR))).expect("sentinel encodes"), json!("UNKNOWN"));
	}

	#[test]
	fn decoded_values_encode_back_to_input() {
		for text in [r#"{"x": 1, "labelText": "a"}"#, r#"{"x": 2, "labelText": null}"#] {
			let input = parse_json(text);
			let value = decode(input.clone(), &POINT_REF).expect("point decodes");
			assert_eq!(encode(&value).expect("point encodes"), input);
		}

		let input = parse_json(r#"{"type": "set", "set": ["a", "b"]}"#);
		let value = decode(input.clone(), &SHAPE_REF).expect("union decodes");
		assert_eq!(encode(&value).expect("union encodes"), input);
	}

	#[test]
	fn typed_values_encode_through_value_view() {
		let point = Point { x: 7, label: None };
		assert_eq!(encode_typed(&point).expect("point encodes"), json!({"x": 7, "labelText": null}));
		assert_eq!(encode_typed(&f64::NAN).expect("nan encodes"), json!("NaN"));
		assert_eq!(encode_typed(&f64::NEG_INFINITY).expect("infinity encodes"), json!("-Infinity"));
	}

	#[test]
	fn malformed_constructions_are_rejected() {
		let short = BeanValue::from_slots(&POINT, vec![Value::Plain(json!(1))]);
		let err = encode(&Value::Bean(short)).expect_err("slot count mismatch");
		assert!(matches!(err, WireError::SlotCount { type_name: "Point", expected: 2, got: 1 }), "got {err}");
	}

	#[cfg(not(debug_assertions))]
	#[test]
	fn stray_union_position_is_rejected() {
		let stray = UnionValue::from_active(&SHAPE, 9, Value::Plain(json!(1)));
		let err = encode(&Value::Union(stray)).expect_err("no option at position 9");
		assert!(matches!(err, WireError::InvalidUnionState { union_name: "Shape", .. }), "got {err}");
	}
}

mod map_keys {
	use serde_json::json;

	use crate::wire::test_support::COLOR;
	use crate::wire::{EnumValue, MapValue, Value, WireError, encode, write_to_string};

	#[test]
	fn scalar_keys_become_object_keys() {
		let mut map = MapValue::new();
		map.insert(Value::Plain(json!("name")), Value::Plain(json!(1)));
		map.insert(Value::Plain(json!(5)), Value::Plain(json!(2)));
		map.insert(Value::Plain(json!(true)), Value::Plain(json!(3)));
		map.insert(Value::Enum(EnumValue::of(&COLOR, "GREEN")), Value::Plain(json!(4)));

		let encoded = encode(&Value::Map(map)).expect("map encodes");
		assert_eq!(encoded, json!({"name": 1, "5": 2, "true": 3, "GREEN": 4}));
	}

	#[test]
	fn structured_keys_are_unsupported() {
		let mut map = MapValue::new();
		map.insert(Value::List(vec![Value::Plain(json!(1))]), Value::Plain(json!(1)));
		let err = encode(&Value::Map(map)).expect_err("list key cannot be an object key");
		assert!(matches!(err, WireError::UnsupportedMapKey { ref key } if key == "[1]"), "got {err}");

		let mut map = MapValue::new();
		map.insert(Value::Empty, Value::Plain(json!(1)));
		assert!(matches!(encode(&Value::Map(map)), Err(WireError::UnsupportedMapKey { .. })));
	}

	#[test]
	fn colliding_object_keys_are_rejected() {
		let mut map = MapValue::new();
		map.insert(Value::Plain(json!("1")), Value::Plain(json!("text")));
		map.insert(Value::Plain(json!(1)), Value::Plain(json!("number")));
		assert_eq!(map.len(), 2, "distinct native keys");

		let err = encode(&Value::Map(map)).expect_err("both keys write as \"1\"");
		assert!(matches!(err, WireError::DuplicateMapKey { ref key } if key == "1"), "got {err}");
	}

	#[test]
	fn writer_emits_compact_text() {
		let items = vec!["a".to_owned(), "b".to_owned()];
		assert_eq!(write_to_string(&items).expect("list writes"), r#"["a","b"]"#);
	}
}
