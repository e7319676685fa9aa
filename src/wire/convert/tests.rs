mod scalars {
	use serde_json::json;

	use crate::wire::{FromValue, ToValue, Value, WireError};

	#[test]
	fn integers_respect_width() {
		assert_eq!(i64::from_value(Value::Plain(json!(i64::MAX))).expect("i64 fits"), i64::MAX);
		assert_eq!(i32::from_value(Value::Plain(json!(-12))).expect("i32 fits"), -12);

		let err = i32::from_value(Value::Plain(json!(1_i64 << 40))).expect_err("too wide for i32");
		assert!(matches!(err, WireError::TypeMismatch { expected: "integer", .. }), "got {err}");

		let err = i64::from_value(Value::Plain(json!(1.5))).expect_err("fractional is not an integer");
		assert!(matches!(err, WireError::TypeMismatch { expected: "integer", got: "number", .. }), "got {err}");
	}

	#[test]
	fn doubles_accept_special_strings() {
		assert_eq!(f64::from_value(Value::Plain(json!(2))).expect("integer widens"), 2.0);
		assert!(f64::from_value(Value::Plain(json!("NaN"))).expect("nan parses").is_nan());
		assert_eq!(f64::from_value(Value::Plain(json!("Infinity"))).expect("infinity parses"), f64::INFINITY);
		assert!(f64::from_value(Value::Plain(json!("1.5"))).is_err(), "numeric strings are not doubles");

		assert_eq!(f64::INFINITY.to_value(), Value::Plain(json!("Infinity")));
		assert_eq!(0.25_f64.to_value(), Value::Plain(json!(0.25)));
	}

	#[test]
	fn optional_accepts_empty_and_null() {
		assert_eq!(Option::<String>::from_value(Value::Empty).expect("empty"), None);
		assert_eq!(Option::<String>::from_value(Value::Plain(json!(null))).expect("null"), None);
		assert_eq!(Option::<String>::from_value(Value::Plain(json!("x"))).expect("some"), Some("x".to_owned()));
		assert_eq!(None::<bool>.to_value(), Value::Empty);
	}

	#[test]
	fn any_keeps_json_untouched() {
		let raw = json!({"deep": [1, {"x": null}]});
		assert_eq!(serde_json::Value::from_value(Value::Plain(raw.clone())).expect("any converts"), raw);
		assert_eq!(serde_json::Value::from_value(Value::Empty).expect("empty any"), json!(null));
	}

	#[test]
	fn wrong_shape_names_expected_kind() {
		let err = bool::from_value(Value::Plain(json!("true"))).expect_err("string is not a boolean");
		assert!(matches!(err, WireError::TypeMismatch { expected: "boolean", got: "string", .. }), "got {err}");

		let err = String::from_value(Value::List(Vec::new())).expect_err("list is not a string");
		assert!(matches!(err, WireError::TypeMismatch { expected: "string", got: "list", .. }), "got {err}");
	}
}

mod collections {
	use std::collections::{BTreeMap, BTreeSet};

	use serde_json::json;

	use crate::wire::{FromValue, MapValue, ToValue, Value, WireError};

	#[test]
	fn list_errors_carry_index() {
		let value = Value::List(vec![Value::Plain(json!(1)), Value::Plain(json!("two"))]);
		let err = Vec::<i64>::from_value(value).expect_err("second item is not an integer");
		assert!(matches!(err, WireError::TypeMismatch { ref path, .. } if path == "[1]"), "got {err}");
	}

	#[test]
	fn nested_list_paths_compose() {
		let value = Value::List(vec![Value::List(vec![Value::Plain(json!(1)), Value::Plain(json!(false))])]);
		let err = Vec::<Vec<i64>>::from_value(value).expect_err("inner item is a boolean");
		assert!(matches!(err, WireError::TypeMismatch { ref path, .. } if path == "[0][1]"), "got {err}");
	}

	#[test]
	fn sets_collapse_duplicates() {
		let value = Value::List(vec![Value::Plain(json!("b")), Value::Plain(json!("a")), Value::Plain(json!("b"))]);
		let set = BTreeSet::<String>::from_value(value).expect("set converts");
		assert_eq!(set.into_iter().collect::<Vec<_>>(), ["a", "b"]);
	}

	#[test]
	fn maps_convert_both_ways() {
		let mut native = BTreeMap::new();
		native.insert("a".to_owned(), vec![1_i64, 2]);
		native.insert("b".to_owned(), Vec::new());

		let value = native.to_value();
		assert_eq!(value.as_map().map(MapValue::len), Some(2));
		assert_eq!(BTreeMap::<String, Vec<i64>>::from_value(value).expect("map converts back"), native);
	}

	#[test]
	fn scalar_keys_read_back_from_object_key_text() {
		let native = BTreeMap::from([(1_i32, "one".to_owned()), (-20, "minus twenty".to_owned())]);
		let encoded = crate::wire::encode_typed(&native).expect("integer keys encode");
		assert_eq!(encoded, json!({"1": "one", "-20": "minus twenty"}));

		let target = crate::wire::TypeDescriptor::Map(&crate::wire::PRIMITIVE, &crate::wire::PRIMITIVE);
		let decoded: BTreeMap<i32, String> = crate::wire::decode_as(encoded, &target).expect("integer keys decode");
		assert_eq!(decoded, native);

		let flags: MapValue = [(Value::Plain(json!("true")), Value::Plain(json!(1)))].into_iter().collect();
		let flags = BTreeMap::<bool, i64>::from_value(Value::Map(flags)).expect("boolean key parses");
		assert_eq!(flags.get(&true), Some(&1));
	}

	#[test]
	fn numeric_looking_string_keys_stay_strings() {
		let map: MapValue = [(Value::Plain(json!("1")), Value::Plain(json!("a"))), (Value::Plain(json!("true")), Value::Plain(json!("b")))]
			.into_iter()
			.collect();
		let native = BTreeMap::<String, String>::from_value(Value::Map(map)).expect("string keys convert");
		assert_eq!(native.get("1").map(String::as_str), Some("a"));
		assert_eq!(native.get("true").map(String::as_str), Some("b"));

		let map: MapValue = [(Value::Plain(json!("one")), Value::Plain(json!("a")))].into_iter().collect();
		let err = BTreeMap::<i32, String>::from_value(Value::Map(map)).expect_err("key is not an integer");
		assert!(matches!(err, WireError::TypeMismatch { expected: "integer", got: "string", ref path } if path == r#"["one"]"#), "got {err}");
	}

	#[test]
	fn map_errors_carry_key() {
		let map: MapValue = [(Value::Plain(json!("a")), Value::Plain(json!("x")))].into_iter().collect();
		let err = BTreeMap::<String, i64>::from_value(Value::Map(map)).expect_err("value is not an integer");
		assert!(matches!(err, WireError::TypeMismatch { ref path, .. } if path == r#"["a"]"#), "got {err}");
	}
}

mod constructors {
	use serde_json::json;

	use crate::wire::test_support::{POINT, SHAPE};
	use crate::wire::{BeanValue, UnionValue, Value, WireError};

	#[test]
	fn bean_take_names_type_and_slot() {
		let mut bean = BeanValue::from_slots(&POINT, vec![Value::Plain(json!("s")), Value::Empty]);
		let err = bean.take::<i64>("x").expect_err("x holds a string");
		assert!(matches!(err, WireError::TypeMismatch { ref path, .. } if path == "Point.x"), "got {err}");

		let label: Option<String> = bean.take("label").expect("empty label converts");
		assert_eq!(label, None);

		let err = bean.take::<i64>("y").expect_err("no such slot");
		assert!(matches!(err, WireError::MissingSlot { type_name: "Point", ref slot } if slot == "y"), "got {err}");
	}

	#[test]
	fn union_take_names_option() {
		let union = UnionValue::new(&SHAPE, "number", Value::Plain(json!("five"))).expect("option exists");
		let err = union.take::<i64>().expect_err("number holds a string");
		assert!(matches!(err, WireError::TypeMismatch { ref path, .. } if path == "Shape.number"), "got {err}");
	}

	#[test]
	fn union_options_require_single_member() {
		let built = UnionValue::from_options(&SHAPE, [("string_example", None), ("set", None), ("number", Some(Value::Plain(json!(5))))])
			.expect("one option populated");
		assert_eq!(built.discriminant(), "number");

		let err = UnionValue::from_options(&SHAPE, [("string_example", Some(Value::Plain(json!("a")))), ("number", Some(Value::Plain(json!(5))))])
			.expect_err("two options populated");
		assert!(matches!(err, WireError::InvalidUnionState { populated: 2, .. }), "got {err}");

		let err = UnionValue::from_options(&SHAPE, [("set", None)]).expect_err("nothing populated");
		assert!(matches!(err, WireError::InvalidUnionState { populated: 0, .. }), "got {err}");
	}
}
