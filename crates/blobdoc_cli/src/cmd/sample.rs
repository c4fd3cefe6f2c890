use blobdoc::blob::{FieldValue, Value};

/// Mapping with string, integer, float, and boolean keys plus nested values.
pub fn sample_mapping() -> Value {
	let user_info = Value::map([
		("age", Value::from(25)),
		("city", Value::from("Beijing")),
		("active", Value::from(true)),
	]);
	let point = Value::record("Point", vec![FieldValue::public("x", 10), FieldValue::public("y", 20)]);

	Value::map([
		(Value::from("name"), Value::from("Zhang San")),
		(Value::from(42), Value::from("integer as key")),
		(Value::from(2.5), Value::from("float as key")),
		(Value::from(true), Value::from("boolean as key")),
		(Value::from("user_info"), user_info),
		(Value::from("scores"), Value::seq([95, 87, 92])),
		(Value::from("point"), point),
	])
}

/// Session store payload: a mapping holding a reference to a `Session` record.
pub fn sample_session() -> Value {
	let options = Value::record(
		"Options",
		vec![
			FieldValue::public("path", "/"),
			FieldValue::public("domain", ""),
			FieldValue::public("max_age", 86_400 * 30),
			FieldValue::public("secure", false),
			FieldValue::public("http_only", true),
			FieldValue::public("same_site", 0),
		],
	);
	let values = Value::map([
		(Value::from("provider"), Value::from("google")),
		(Value::from("state"), Value::from("b1f0c2")),
		(Value::from(1), Value::from(true)),
	]);
	let session = Value::record(
		"Session",
		vec![
			FieldValue::public("id", ""),
			FieldValue::public("values", values).with_declared_type("map[any]any"),
			FieldValue::public("options", Value::reference(options)).with_declared_type("&Options"),
			FieldValue::public("is_new", true),
			FieldValue::private("store", Value::Ref(None)).with_declared_type("&CookieStore"),
			FieldValue::private("name", "_gothic_session"),
		],
	);

	Value::map([
		(Value::from("_session"), Value::reference(session)),
		(Value::from("flashes"), Value::seq(Vec::<Value>::new())),
	])
}
