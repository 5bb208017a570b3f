// 🧩 DynamicClass - Attribute bag with fallback lookup
//
// Declared fields resolve first; anything else is looked up in the
// attribute map, and a miss is an explicit MissingAttribute error.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

const CLASS_NAME: &str = "DynamicClass";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicClass {
    attributes: HashMap<String, Value>,
}

impl DynamicClass {
    /// Class-level constant, shared by all instances
    pub const STATIC_VALUE: i64 = 0;

    pub fn new() -> Self {
        DynamicClass {
            attributes: HashMap::new(),
        }
    }

    /// Insert or overwrite an attribute
    pub fn dynamic_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        tracing::debug!(attribute = %name, %value, "dynamic attribute set");
        self.attributes.insert(name, value);
    }

    /// Resolve an attribute by name.
    ///
    /// `static_value` and `attributes` are declared fields and win over
    /// any dynamic attribute of the same name.
    pub fn get(&self, name: &str) -> Result<Value> {
        match name {
            "static_value" => Ok(Value::from(Self::STATIC_VALUE)),
            "attributes" => Ok(Value::Object(
                self.attributes
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect::<Map<String, Value>>(),
            )),
            _ => self
                .attributes
                .get(name)
                .cloned()
                .ok_or_else(|| ModelError::MissingAttribute {
                    class: CLASS_NAME.to_string(),
                    attribute: name.to_string(),
                }),
        }
    }

    /// Dynamic attributes only, without the error path
    pub fn try_get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
