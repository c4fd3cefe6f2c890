use minicbor::Decoder;
use minicbor::data::Type;

use crate::blob::encode::{RECORD_TAG, REF_TAG};
use crate::blob::value::{FieldValue, MapEntry, RecordValue, Value};
use crate::blob::{BlobError, Result};

/// Runtime limits for CBOR decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting depth; the root item sits at depth 0, so 0 rejects every input.
	pub max_depth: u32,
	/// Maximum declared element count of one array, map, or record.
	pub max_container_len: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			max_container_len: 1 << 20,
		}
	}
}

impl DecodeOptions {
	/// Tighter preset for blobs of unknown origin.
	pub fn for_untrusted() -> Self {
		Self {
			max_depth: 32,
			max_container_len: 65_536,
		}
	}
}

/// Decode exactly one CBOR item into a value tree.
///
/// Trailing bytes after the root item are an error. Items under the reference
/// tag become indirections; untagged record fields whose declared type starts
/// with `&` are rebuilt as indirections too, for blobs from other writers.
pub fn decode_value(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	if bytes.is_empty() {
		return Err(BlobError::EmptyBlob);
	}

	let mut decoder = Decoder::new(bytes);
	let value = decode_item(&mut decoder, opt, 0)?;

	let at = decoder.position();
	if at < bytes.len() {
		return Err(BlobError::TrailingData { at, rem: bytes.len() - at });
	}
	Ok(value)
}

fn decode_item(d: &mut Decoder<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if depth >= opt.max_depth {
		return Err(BlobError::DecodeDepthExceeded { max_depth: opt.max_depth });
	}

	let at = d.position();
	match d.datatype()? {
		Type::Null => {
			d.null()?;
			Ok(Value::Nil)
		}
		Type::Undefined => {
			d.undefined()?;
			Ok(Value::Nil)
		}
		Type::Bool => Ok(Value::Bool(d.bool()?)),
		Type::U8 | Type::U16 | Type::U32 | Type::U64 => Ok(Value::from(d.u64()?)),
		Type::I8 | Type::I16 | Type::I32 | Type::I64 => Ok(Value::Int(d.i64()?)),
		Type::Int => {
			let int = d.int()?;
			if let Ok(v) = i64::try_from(int) {
				return Ok(Value::Int(v));
			}
			u64::try_from(int).map(Value::Uint).map_err(|_| BlobError::IntegerOutOfRange { at })
		}
		Type::F16 => Ok(Value::Float(f64::from(d.f16()?))),
		Type::F32 => Ok(Value::Float(f64::from(d.f32()?))),
		Type::F64 => Ok(Value::Float(d.f64()?)),
		Type::String => Ok(Value::String(d.str()?.into())),
		Type::StringIndef => {
			let mut out = String::new();
			for chunk in d.str_iter()? {
				out.push_str(chunk?);
			}
			Ok(Value::String(out.into_boxed_str()))
		}
		Type::Bytes => Ok(Value::Bytes(d.bytes()?.to_vec())),
		Type::BytesIndef => {
			let mut out = Vec::new();
			for chunk in d.bytes_iter()? {
				out.extend_from_slice(chunk?);
			}
			Ok(Value::Bytes(out))
		}
		Type::Array => {
			let len = container_len(d.array()?, "array", at, opt)?;
			let mut items = Vec::with_capacity(len);
			for _ in 0..len {
				items.push(decode_item(d, opt, depth + 1)?);
			}
			Ok(Value::Seq(items))
		}
		Type::Map => {
			let len = container_len(d.map()?, "map", at, opt)?;
			let mut entries = Vec::with_capacity(len);
			for _ in 0..len {
				let key = decode_item(d, opt, depth + 1)?;
				let value = decode_item(d, opt, depth + 1)?;
				entries.push(MapEntry { key, value });
			}
			Ok(Value::Map(entries))
		}
		Type::ArrayIndef => Err(BlobError::IndefiniteContainer { kind: "array", at }),
		Type::MapIndef => Err(BlobError::IndefiniteContainer { kind: "map", at }),
		Type::Tag => {
			let tag = d.tag()?;
			if tag.as_u64() == RECORD_TAG {
				return decode_record(d, opt, depth, at).map(Value::Record);
			}
			if tag.as_u64() == REF_TAG {
				return decode_item(d, opt, depth + 1).map(into_reference_target);
			}
			log::debug!("ignoring cbor tag {} at offset {at}", tag.as_u64());
			decode_item(d, opt, depth + 1)
		}
		other => Err(BlobError::UnsupportedItem {
			kind: format!("{other:?}"),
			at,
		}),
	}
}

fn decode_record(d: &mut Decoder<'_>, opt: &DecodeOptions, depth: u32, at: usize) -> Result<RecordValue> {
	if d.array()? != Some(2) {
		return Err(BlobError::MalformedRecord {
			at,
			reason: "expected [type_name, fields]",
		});
	}
	let type_name: Box<str> = d.str()?.into();

	let field_count = container_len(d.array()?, "array", at, opt)?;
	let mut fields = Vec::with_capacity(field_count);
	for _ in 0..field_count {
		if d.array()? != Some(4) {
			return Err(BlobError::MalformedRecord {
				at,
				reason: "expected [name, declared_type, visible, value]",
			});
		}
		let name: Box<str> = d.str()?.into();
		let declared_type: Box<str> = d.str()?.into();
		let visible = d.bool()?;
		let mut value = decode_item(d, opt, depth + 1)?;
		if declared_type.starts_with('&') {
			value = into_reference(value);
		}
		fields.push(FieldValue {
			name,
			declared_type,
			visible,
			value,
		});
	}

	Ok(RecordValue { type_name, fields })
}

fn container_len(len: Option<u64>, kind: &'static str, at: usize, opt: &DecodeOptions) -> Result<usize> {
	let len = len.ok_or(BlobError::IndefiniteContainer { kind, at })?;
	match usize::try_from(len) {
		Ok(count) if count <= opt.max_container_len => Ok(count),
		_ => Err(BlobError::DecodeContainerTooLarge {
			at,
			len,
			max: opt.max_container_len,
		}),
	}
}

fn into_reference_target(value: Value) -> Value {
	match value {
		Value::Nil => Value::Ref(None),
		other => Value::Ref(Some(Box::new(other))),
	}
}

fn into_reference(value: Value) -> Value {
	match value {
		Value::Ref(_) => value,
		Value::Nil => Value::Ref(None),
		other => Value::Ref(Some(Box::new(other))),
	}
}

#[cfg(test)]
mod tests;
