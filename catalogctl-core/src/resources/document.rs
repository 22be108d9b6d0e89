//! Schema-less documents for kinds without a typed record

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::resource::Resource;

/// Any frontmatter document: `id`, the markdown body, and every other field
/// in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub markdown: String,
    #[serde(flatten)]
    pub fields: Mapping,
}

impl Document {
    pub fn new(id: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            markdown: markdown.into(),
            fields: Mapping::new(),
        }
    }

    /// Builder-style field setter
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(Value::String(key.into()), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl Resource for Document {
    fn id(&self) -> &str {
        &self.id
    }
}
