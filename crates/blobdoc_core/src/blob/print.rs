use std::convert::Infallible;
use std::io::{self, Write};

use crate::blob::Value;

/// Indent added in front of `Key`/`Value`/`Index`/`Field` labels under a header.
pub const LABEL_UNIT: &str = "  ";
/// Indent added for every recursive descent into a child value.
pub const DESCENT_UNIT: &str = "    ";

/// Render a value tree as indented lines, starting at `indent`.
///
/// Map entries come out in storage order. Keys print their inline text and
/// type only and are never expanded.
pub fn render_lines(value: &Value, indent: &str) -> Vec<String> {
	let mut lines = Vec::new();
	walk(value, indent, &mut |line| {
		lines.push(line);
		Ok::<(), Infallible>(())
	})
	.unwrap_or_else(|never| match never {});
	lines
}

/// Stream the rendered tree to `out`, one line per node label.
pub fn write_tree<W: Write>(out: &mut W, value: &Value, indent: &str) -> io::Result<()> {
	walk(value, indent, &mut |line| writeln!(out, "{line}"))
}

fn walk<E>(value: &Value, indent: &str, emit: &mut impl FnMut(String) -> Result<(), E>) -> Result<(), E> {
	let Some(value) = value.resolve() else {
		return emit(format!("{indent}nil"));
	};

	match value {
		Value::Map(entries) => {
			emit(format!("{indent}Map:"))?;
			let (label, nested) = child_indents(indent);
			for entry in entries {
				emit(format!("{label}Key: {} ({})", entry.key, entry.key.type_name()))?;
				emit(format!("{label}Value: ({})", entry.value.type_name()))?;
				walk(&entry.value, &nested, emit)?;
			}
		}
		Value::Seq(items) => {
			emit(format!("{indent}Slice/Array:"))?;
			let (label, nested) = child_indents(indent);
			for (idx, item) in items.iter().enumerate() {
				emit(format!("{label}Index {idx}:"))?;
				walk(item, &nested, emit)?;
			}
		}
		Value::Record(item) => {
			emit(format!("{indent}Struct {}:", item.type_name))?;
			let (label, nested) = child_indents(indent);
			for field in item.visible_fields() {
				emit(format!("{label}Field {} ({}):", field.name, field.declared_type))?;
				walk(&field.value, &nested, emit)?;
			}
		}
		leaf => emit(format!("{indent}{leaf} ({})", leaf.type_name()))?,
	}

	Ok(())
}

fn child_indents(indent: &str) -> (String, String) {
	(format!("{indent}{LABEL_UNIT}"), format!("{indent}{DESCENT_UNIT}"))
}
