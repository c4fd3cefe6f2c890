use minicbor::Encoder;
use minicbor::data::Tag;

use crate::blob::{Result, Value};

/// CBOR tag carrying a record: `[type_name, [[name, declared_type, visible, value], ...]]`.
pub const RECORD_TAG: u64 = 27;
/// CBOR tag marking an indirection; the tagged item is the target, or null when absent.
pub const REF_TAG: u64 = 28;

/// Encode a value tree as one CBOR item.
///
/// Nil becomes CBOR null. Indirections are written under [`REF_TAG`] so they
/// survive decoding in any position. Records keep hidden fields so a decoder
/// can rebuild field visibility.
pub fn encode_value(value: &Value) -> Result<Vec<u8>> {
	let mut encoder = Encoder::new(Vec::new());
	write_value(&mut encoder, value)?;
	Ok(encoder.into_writer())
}

fn write_value(e: &mut Encoder<Vec<u8>>, value: &Value) -> Result<()> {
	match value {
		Value::Nil => {
			e.null()?;
		}
		Value::Bool(v) => {
			e.bool(*v)?;
		}
		Value::Int(v) => {
			e.i64(*v)?;
		}
		Value::Uint(v) => {
			e.u64(*v)?;
		}
		Value::Float(v) => {
			e.f64(*v)?;
		}
		Value::String(v) => {
			e.str(v)?;
		}
		Value::Bytes(v) => {
			e.bytes(v)?;
		}
		Value::Seq(items) => {
			e.array(items.len() as u64)?;
			for item in items {
				write_value(e, item)?;
			}
		}
		Value::Map(entries) => {
			e.map(entries.len() as u64)?;
			for entry in entries {
				write_value(e, &entry.key)?;
				write_value(e, &entry.value)?;
			}
		}
		Value::Record(item) => {
			e.tag(Tag::new(RECORD_TAG))?.array(2)?.str(&item.type_name)?.array(item.fields.len() as u64)?;
			for field in &item.fields {
				e.array(4)?.str(&field.name)?.str(&field.declared_type)?.bool(field.visible)?;
				write_value(e, &field.value)?;
			}
		}
		Value::Ref(target) => {
			e.tag(Tag::new(REF_TAG))?;
			match target {
				Some(inner) => write_value(e, inner)?,
				None => {
					e.null()?;
				}
			}
		}
	}
	Ok(())
}
