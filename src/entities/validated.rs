// ✅ ValidatedAttribute - single non-negative value

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ValidatedAttribute {
    value: f64,
}

impl ValidatedAttribute {
    /// Starts at 0
    pub fn new() -> Self {
        ValidatedAttribute { value: 0.0 }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, new_value: f64) -> Result<()> {
        if new_value.is_nan() || new_value < 0.0 {
            return Err(ModelError::out_of_range(
                "value",
                "Value must be a positive integer.",
            ));
        }
        self.value = new_value;
        tracing::debug!(value = new_value, "validated value updated");
        Ok(())
    }
}

impl TryFrom<f64> for ValidatedAttribute {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self> {
        let mut attr = ValidatedAttribute::new();
        attr.set_value(value)?;
        Ok(attr)
    }
}

impl From<ValidatedAttribute> for f64 {
    fn from(attr: ValidatedAttribute) -> f64 {
        attr.value
    }
}
