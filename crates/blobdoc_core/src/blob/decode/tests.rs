use crate::blob::{BlobError, DecodeOptions, FieldValue, Value, decode_value, encode_value};

fn decode(bytes: &[u8]) -> crate::blob::Result<Value> {
	decode_value(bytes, &DecodeOptions::default())
}

#[test]
fn heterogeneous_mapping_survives_encode_and_decode() {
	let value = Value::map([
		(Value::from("name"), Value::from("Alice")),
		(Value::from(42), Value::from("int key")),
		(Value::from(2.5), Value::from("float key")),
		(Value::from(true), Value::from("bool key")),
		(Value::from("scores"), Value::seq([95, 87, 92])),
		(
			Value::from("point"),
			Value::record("Point", vec![FieldValue::public("x", 10), FieldValue::public("y", 20)]),
		),
	]);

	let bytes = encode_value(&value).expect("encode");
	assert_eq!(decode(&bytes).expect("decode"), value);
}

#[test]
fn reference_fields_are_rebuilt_from_declared_types() {
	let options = Value::record("Options", vec![FieldValue::public("path", "/")]);
	let value = Value::record(
		"Session",
		vec![
			FieldValue::public("options", Value::reference(options.clone())).with_declared_type("&Options"),
			FieldValue::public("parent", Value::Ref(None)).with_declared_type("&Session"),
			FieldValue::private("store", Value::Nil),
		],
	);

	let decoded = decode(&encode_value(&value).expect("encode")).expect("decode");
	let Value::Record(record) = decoded else {
		panic!("expected record");
	};
	assert_eq!(record.field("options").map(|field| &field.value), Some(&Value::reference(options)));
	assert_eq!(record.field("parent").map(|field| &field.value), Some(&Value::Ref(None)));
	assert_eq!(record.field("store").map(|field| &field.value), Some(&Value::Nil));
	assert!(!record.field("store").expect("store field").visible);
}

#[test]
fn tagged_references_survive_in_any_position() {
	let value = Value::map([
		(Value::from("s"), Value::reference(1)),
		(Value::from("absent"), Value::Ref(None)),
		(Value::from("chain"), Value::reference(Value::reference("x"))),
		(Value::from("items"), Value::seq([Value::reference(2), Value::Nil])),
	]);

	let bytes = encode_value(&value).expect("encode");
	assert_eq!(decode(&bytes).expect("decode"), value);
}

#[test]
fn untagged_reference_fields_from_other_writers_are_rewrapped() {
	// tag 27 ["S", [["o", "&T", true, 5]]]
	let bytes = [
		0xd8, 0x1b, 0x82, 0x61, 0x53, 0x81, 0x84, 0x61, 0x6f, 0x62, 0x26, 0x54, 0xf5, 0x05,
	];
	let Value::Record(record) = decode(&bytes).expect("decode") else {
		panic!("expected record");
	};
	assert_eq!(record.field("o").map(|field| &field.value), Some(&Value::reference(5)));
}

#[test]
fn unsigned_integers_decode_to_canonical_form() {
	let bytes = encode_value(&Value::Uint(5)).expect("encode");
	assert_eq!(decode(&bytes).expect("decode"), Value::from(5_u64));
	assert_eq!(decode(&bytes).expect("decode"), Value::Int(5));
}

#[test]
fn integers_prefer_signed_representation() {
	assert_eq!(decode(&[0x18, 0x2a]).expect("decode"), Value::Int(42));
	assert_eq!(decode(&[0x38, 0x63]).expect("decode"), Value::Int(-100));
	assert_eq!(
		decode(&[0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]).expect("decode"),
		Value::Uint(u64::MAX)
	);
	assert!(matches!(
		decode(&[0x3b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]),
		Err(BlobError::IntegerOutOfRange { at: 0 })
	));
}

#[test]
fn half_and_single_floats_widen() {
	assert_eq!(decode(&[0xf9, 0x3e, 0x00]).expect("decode"), Value::Float(1.5));
	assert_eq!(decode(&[0xfa, 0x3f, 0xc0, 0x00, 0x00]).expect("decode"), Value::Float(1.5));
}

#[test]
fn indefinite_strings_are_joined() {
	let bytes = [0x7f, 0x61, b'a', 0x61, b'b', 0xff];
	assert_eq!(decode(&bytes).expect("decode"), Value::from("ab"));
	let bytes = [0x5f, 0x41, 0x01, 0x41, 0x02, 0xff];
	assert_eq!(decode(&bytes).expect("decode"), Value::Bytes(vec![1, 2]));
}

#[test]
fn indefinite_containers_are_rejected() {
	assert!(matches!(
		decode(&[0x9f, 0x01, 0xff]),
		Err(BlobError::IndefiniteContainer { kind: "array", at: 0 })
	));
	assert!(matches!(
		decode(&[0xbf, 0xff]),
		Err(BlobError::IndefiniteContainer { kind: "map", at: 0 })
	));
}

#[test]
fn unknown_tags_are_transparent() {
	assert_eq!(decode(&[0xc1, 0x1a, 0x00, 0x01, 0x00, 0x00]).expect("decode"), Value::Int(65_536));
}

#[test]
fn trailing_bytes_are_rejected() {
	assert!(matches!(decode(&[0x01, 0x02]), Err(BlobError::TrailingData { at: 1, rem: 1 })));
	assert!(matches!(decode(&[]), Err(BlobError::EmptyBlob)));
}

#[test]
fn limits_bound_depth_and_container_size() {
	let opt = DecodeOptions {
		max_depth: 3,
		..DecodeOptions::default()
	};
	assert!(decode_value(&[0x81, 0x81, 0x01], &opt).is_ok());
	assert!(matches!(
		decode_value(&[0x81, 0x81, 0x81, 0x01], &opt),
		Err(BlobError::DecodeDepthExceeded { max_depth: 3 })
	));

	let opt = DecodeOptions {
		max_container_len: 2,
		..DecodeOptions::default()
	};
	assert!(matches!(
		decode_value(&[0x83, 0x01, 0x02, 0x03], &opt),
		Err(BlobError::DecodeContainerTooLarge { at: 0, len: 3, max: 2 })
	));
}

#[test]
fn malformed_records_report_offset() {
	let bytes = [0xd8, 0x1b, 0x81, 0x61, b'P'];
	assert!(matches!(decode(&bytes), Err(BlobError::MalformedRecord { at: 0, .. })));
}
