use crate::blob::Value;

/// Shape counts gathered from one value tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueStats {
	/// Leaf lines the structural printer emits, nil included.
	pub leaves: usize,
	/// Nil values and absent indirections.
	pub nils: usize,
	/// Mappings.
	pub maps: usize,
	/// Map entries across all mappings.
	pub map_entries: usize,
	/// Sequences.
	pub seqs: usize,
	/// Records.
	pub records: usize,
	/// Record fields hidden from output.
	pub hidden_fields: usize,
	/// Indirections, present or absent.
	pub refs: usize,
	/// Deepest descent below the root.
	pub max_depth: usize,
}

impl ValueStats {
	/// Walk `value` the way the printer does and count what it sees.
	pub fn scan(value: &Value) -> Self {
		let mut stats = Self::default();
		stats.visit(value, 0);
		stats
	}

	fn visit(&mut self, value: &Value, depth: usize) {
		self.max_depth = self.max_depth.max(depth);
		match value {
			Value::Ref(Some(inner)) => {
				self.refs += 1;
				self.visit(inner, depth);
			}
			Value::Ref(None) => {
				self.refs += 1;
				self.nils += 1;
				self.leaves += 1;
			}
			Value::Nil => {
				self.nils += 1;
				self.leaves += 1;
			}
			Value::Map(entries) => {
				self.maps += 1;
				self.map_entries += entries.len();
				for entry in entries {
					self.visit(&entry.value, depth + 1);
				}
			}
			Value::Seq(items) => {
				self.seqs += 1;
				for item in items {
					self.visit(item, depth + 1);
				}
			}
			Value::Record(item) => {
				self.records += 1;
				for field in &item.fields {
					if field.visible {
						self.visit(&field.value, depth + 1);
					} else {
						self.hidden_fields += 1;
					}
				}
			}
			_ => self.leaves += 1,
		}
	}
}
