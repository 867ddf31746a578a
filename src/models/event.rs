use serde::{Deserialize, Serialize};

/// Status changes reported by a [`Plant`](crate::models::Plant).
///
/// Plants never log on their own; callers decide where these go
/// (see [`GrowJournal`](crate::logic::journal::GrowJournal)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlantEvent {
    /// Roots began showing out the bottom of the netcup.
    RootsShowing { plant: String },
    DistanceAdjusted { plant: String, from: f64, to: f64 },
}

impl PlantEvent {
    pub fn plant_name(&self) -> &str {
        match self {
            PlantEvent::RootsShowing { plant } | PlantEvent::DistanceAdjusted { plant, .. } => {
                plant.as_str()
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            PlantEvent::RootsShowing { plant } => {
                format!("{plant}: roots began showing out bottom of netcup")
            }
            PlantEvent::DistanceAdjusted { plant, from, to } => {
                format!("{plant}: distance from light moved from {from} to {to} inches")
            }
        }
    }
}
