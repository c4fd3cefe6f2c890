use std::borrow::Cow;
use std::fmt;

/// Runtime value produced by blob decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit nil marker.
	Nil,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int(i64),
	/// Unsigned integer scalar too large for `i64`.
	///
	/// Smaller unsigned values are carried as [`Value::Int`]; `From<u64>` and
	/// the decoder both produce that canonical form.
	Uint(u64),
	/// Floating point scalar.
	Float(f64),
	/// UTF-8 string.
	String(Box<str>),
	/// Opaque byte payload.
	Bytes(Vec<u8>),
	/// Ordered sequence of values.
	Seq(Vec<Value>),
	/// Key/value mapping with keys of any shape, in storage order.
	Map(Vec<MapEntry>),
	/// Named record with declared fields.
	Record(RecordValue),
	/// Optional indirection to another value.
	Ref(Option<Box<Value>>),
}

/// One key/value pair of a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
	/// Entry key.
	pub key: Value,
	/// Entry value.
	pub value: Value,
}

/// Record value with field metadata preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	/// Declared record type name.
	pub type_name: Box<str>,
	/// Fields in declaration order, including hidden ones.
	pub fields: Vec<FieldValue>,
}

impl RecordValue {
	/// Create a record from a type name and ordered fields.
	pub fn new(type_name: impl Into<Box<str>>, fields: Vec<FieldValue>) -> Self {
		Self {
			type_name: type_name.into(),
			fields,
		}
	}

	/// Iterate externally visible fields in declaration order.
	pub fn visible_fields(&self) -> impl Iterator<Item = &FieldValue> {
		self.fields.iter().filter(|field| field.visible)
	}

	/// Look up a field by name, visible or not.
	pub fn field(&self, name: &str) -> Option<&FieldValue> {
		self.fields.iter().find(|field| &*field.name == name)
	}
}

/// Named record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field identifier.
	pub name: Box<str>,
	/// Type the field was declared with.
	pub declared_type: Box<str>,
	/// Whether the field is visible outside its record.
	pub visible: bool,
	/// Field payload.
	pub value: Value,
}

impl FieldValue {
	/// Visible field whose declared type is the value's dynamic type.
	pub fn public(name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		Self::build(name.into(), value.into(), true)
	}

	/// Hidden field whose declared type is the value's dynamic type.
	pub fn private(name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		Self::build(name.into(), value.into(), false)
	}

	/// Override the declared type.
	pub fn with_declared_type(mut self, declared_type: impl Into<Box<str>>) -> Self {
		self.declared_type = declared_type.into();
		self
	}

	fn build(name: Box<str>, value: Value, visible: bool) -> Self {
		let declared_type = value.type_name().into_owned().into_boxed_str();
		Self {
			name,
			declared_type,
			visible,
			value,
		}
	}
}

impl Value {
	/// Build a mapping from key/value pairs, keeping their order.
	pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<Value>,
		V: Into<Value>,
	{
		Self::Map(
			entries
				.into_iter()
				.map(|(key, value)| MapEntry {
					key: key.into(),
					value: value.into(),
				})
				.collect(),
		)
	}

	/// Build a sequence from items.
	pub fn seq<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
		Self::Seq(items.into_iter().map(Into::into).collect())
	}

	/// Build a record value.
	pub fn record(type_name: impl Into<Box<str>>, fields: Vec<FieldValue>) -> Self {
		Self::Record(RecordValue::new(type_name, fields))
	}

	/// Wrap a value in a present indirection.
	pub fn reference(value: impl Into<Value>) -> Self {
		Self::Ref(Some(Box::new(value.into())))
	}

	/// Follow indirections; `None` when the chain ends in nil.
	pub fn resolve(&self) -> Option<&Value> {
		let mut current = self;
		loop {
			match current {
				Self::Ref(Some(inner)) => current = inner,
				Self::Ref(None) | Self::Nil => return None,
				other => return Some(other),
			}
		}
	}

	/// Shape label without element types.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Nil => "nil",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Uint(_) => "uint",
			Self::Float(_) => "float",
			Self::String(_) => "string",
			Self::Bytes(_) => "bytes",
			Self::Seq(_) => "seq",
			Self::Map(_) => "map",
			Self::Record(_) => "record",
			Self::Ref(_) => "ref",
		}
	}

	/// Dynamic type tag, e.g. `i64`, `[string]`, `map[string]any`, `&Session`.
	pub fn type_name(&self) -> Cow<'static, str> {
		match self {
			Self::Nil => Cow::Borrowed("nil"),
			Self::Bool(_) => Cow::Borrowed("bool"),
			Self::Int(_) => Cow::Borrowed("i64"),
			Self::Uint(_) => Cow::Borrowed("u64"),
			Self::Float(_) => Cow::Borrowed("f64"),
			Self::String(_) => Cow::Borrowed("string"),
			Self::Bytes(_) => Cow::Borrowed("bytes"),
			Self::Seq(items) => Cow::Owned(format!("[{}]", common_type(items.iter()))),
			Self::Map(entries) => Cow::Owned(format!(
				"map[{}]{}",
				common_type(entries.iter().map(|entry| &entry.key)),
				common_type(entries.iter().map(|entry| &entry.value))
			)),
			Self::Record(item) => Cow::Owned(item.type_name.to_string()),
			Self::Ref(Some(inner)) => Cow::Owned(format!("&{}", inner.type_name())),
			Self::Ref(None) => Cow::Borrowed("&nil"),
		}
	}
}

fn common_type<'a>(mut items: impl Iterator<Item = &'a Value>) -> Cow<'static, str> {
	let Some(first) = items.next() else {
		return Cow::Borrowed("any");
	};
	let tag = first.type_name();
	if items.all(|item| item.type_name() == tag) { tag } else { Cow::Borrowed("any") }
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Nil | Self::Ref(None) => f.write_str("nil"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Uint(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::String(v) => f.write_str(v),
			Self::Bytes(v) => write!(f, "bytes[{}]", v.len()),
			Self::Seq(items) => {
				f.write_str("[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Self::Map(entries) => {
				f.write_str("{")?;
				for (idx, entry) in entries.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", entry.key, entry.value)?;
				}
				f.write_str("}")
			}
			Self::Record(item) => {
				write!(f, "{} {{", item.type_name)?;
				for (idx, field) in item.visible_fields().enumerate() {
					f.write_str(if idx == 0 { " " } else { ", " })?;
					write!(f, "{}: {}", field.name, field.value)?;
				}
				if item.visible_fields().next().is_some() {
					f.write_str(" ")?;
				}
				f.write_str("}")
			}
			Self::Ref(Some(inner)) => write!(f, "{inner}"),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		i64::try_from(value).map_or(Self::Uint(value), Self::Int)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		Self::Bytes(value)
	}
}

impl From<RecordValue> for Value {
	fn from(value: RecordValue) -> Self {
		Self::Record(value)
	}
}
