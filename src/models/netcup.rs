use serde::{Deserialize, Serialize};

use crate::models::Plant;

/// A mesh cup holding one plant and its growing media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetCupPlant {
    /// Inches.
    pub diameter: f64,
    /// Inches.
    pub depth: f64,
    pub plant: Plant,
    /// e.g. "rockwool", "clay pebbles".
    pub media: String,
    pub num_seeds: u32,
}

impl NetCupPlant {
    pub fn new(
        diameter: f64,
        depth: f64,
        plant: Plant,
        media: impl Into<String>,
        num_seeds: u32,
    ) -> Self {
        Self {
            diameter,
            depth,
            plant,
            media: media.into(),
            num_seeds,
        }
    }
}
