use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::error::{FarmError, Result};
use crate::models::PlantEvent;

/// Closest a plant top may sit to its light, in inches.
pub const MIN_DISTANCE_FROM_LIGHT: f64 = 1.0;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    #[serde(default)]
    pub latin_name: Option<String>,
    /// Measured from the top of the plant, in inches.
    pub distance_from_light: f64,
    #[serde(default)]
    pub roots_showing: bool,
}

impl Plant {
    pub fn new(name: impl Into<String>, distance_from_light: f64) -> Self {
        Self {
            name: name.into(),
            latin_name: None,
            distance_from_light,
            roots_showing: false,
        }
    }

    pub fn with_latin_name(mut self, latin_name: impl Into<String>) -> Self {
        self.latin_name = Some(latin_name.into());
        self
    }

    pub fn with_roots_showing(mut self) -> Self {
        self.roots_showing = true;
        self
    }

    /// Flags the roots as showing. Returns an event only on the first transition.
    pub fn mark_roots_showing(&mut self) -> Option<PlantEvent> {
        if self.roots_showing {
            return None;
        }
        self.roots_showing = true;
        Some(PlantEvent::RootsShowing {
            plant: self.name.clone(),
        })
    }

    /// Events describing the plant's current condition.
    pub fn status_events(&self) -> Vec<PlantEvent> {
        let mut events = Vec::new();
        if self.roots_showing {
            events.push(PlantEvent::RootsShowing {
                plant: self.name.clone(),
            });
        }
        events
    }

    /// Subtracts `inches_changed` from the distance to the light, so a
    /// positive value moves the plant closer.
    ///
    /// Fails with [`FarmError::TooLowLight`] when the result would drop below
    /// [`MIN_DISTANCE_FROM_LIGHT`] or is not a finite number; the distance is
    /// left untouched in that case.
    pub fn adjust_distance_from_light(&mut self, inches_changed: f64) -> Result<PlantEvent> {
        let from = self.distance_from_light;
        let to = from - inches_changed;
        // NaN fails every comparison, so check finiteness explicitly.
        if !to.is_finite() || to < MIN_DISTANCE_FROM_LIGHT {
            return Err(FarmError::TooLowLight { distance: to });
        }
        self.distance_from_light = to;
        Ok(PlantEvent::DistanceAdjusted {
            plant: self.name.clone(),
            from,
            to,
        })
    }
}
