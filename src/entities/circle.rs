// ⭕ Circle - Validated radius + cached area
//
// The area cache is cleared on every successful radius write, so a
// cached value always matches the current radius.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::f64::consts::PI;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CircleRecord")]
pub struct Circle {
    radius: f64,

    /// `None` = not computed since the last radius change
    #[serde(skip)]
    cached_area: Cell<Option<f64>>,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        let mut circle = Circle {
            radius: 0.0,
            cached_area: Cell::new(None),
        };
        circle.set_radius(radius)?;
        Ok(circle)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rejects negative (and NaN) radii. Always invalidates the area cache,
    /// even when the value does not change.
    pub fn set_radius(&mut self, value: f64) -> Result<()> {
        if value.is_nan() || value < 0.0 {
            return Err(ModelError::out_of_range(
                "radius",
                "Radius must be a positive number.",
            ));
        }

        self.radius = value;
        self.cached_area.set(None);
        tracing::debug!(radius = value, "radius updated, area cache cleared");
        Ok(())
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Computed on first read after a radius change, then served from cache
    pub fn area(&self) -> f64 {
        if let Some(area) = self.cached_area.get() {
            return area;
        }

        let area = PI * (self.radius * self.radius);
        tracing::trace!(radius = self.radius, area, "area computed");
        self.cached_area.set(Some(area));
        area
    }

    pub fn is_area_cached(&self) -> bool {
        self.cached_area.get().is_some()
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
    }
}

#[derive(Deserialize)]
struct CircleRecord {
    radius: f64,
}

impl TryFrom<CircleRecord> for Circle {
    type Error = ModelError;

    fn try_from(record: CircleRecord) -> Result<Self> {
        Circle::new(record.radius)
    }
}
