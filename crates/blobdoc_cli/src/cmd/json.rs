use blobdoc::blob::Value;

/// One rendered node; mirrors the text printer, so hidden fields never appear.
#[derive(Debug, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeJson {
	Nil,
	Leaf {
		#[serde(rename = "type")]
		type_name: String,
		text: String,
	},
	Map {
		#[serde(rename = "type")]
		type_name: String,
		entries: Vec<EntryJson>,
	},
	Seq {
		#[serde(rename = "type")]
		type_name: String,
		items: Vec<NodeJson>,
	},
	Record {
		#[serde(rename = "type")]
		type_name: String,
		fields: Vec<FieldJson>,
	},
}

#[derive(Debug, serde::Serialize)]
pub struct EntryJson {
	pub key: String,
	pub key_type: String,
	pub value: NodeJson,
}

#[derive(Debug, serde::Serialize)]
pub struct FieldJson {
	pub name: String,
	pub declared_type: String,
	pub value: NodeJson,
}

impl NodeJson {
	/// Build the node tree for `value`, dereferencing indirections first.
	pub fn from_value(value: &Value) -> Self {
		let Some(value) = value.resolve() else {
			return Self::Nil;
		};

		let type_name = value.type_name().into_owned();
		match value {
			Value::Map(entries) => Self::Map {
				type_name,
				entries: entries
					.iter()
					.map(|entry| EntryJson {
						key: entry.key.to_string(),
						key_type: entry.key.type_name().into_owned(),
						value: Self::from_value(&entry.value),
					})
					.collect(),
			},
			Value::Seq(items) => Self::Seq {
				type_name,
				items: items.iter().map(Self::from_value).collect(),
			},
			Value::Record(item) => Self::Record {
				type_name,
				fields: item
					.visible_fields()
					.map(|field| FieldJson {
						name: field.name.to_string(),
						declared_type: field.declared_type.to_string(),
						value: Self::from_value(&field.value),
					})
					.collect(),
			},
			leaf => Self::Leaf {
				type_name,
				text: leaf.to_string(),
			},
		}
	}
}
