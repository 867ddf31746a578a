use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::{count_occupied, Matrix, Slot};

/// Snapshot of a tray's netcup grid. Not linked to the factory that built it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrayLayout {
    pub num_plants: usize,
    pub matrix: Matrix<Slot>,
}

impl TrayLayout {
    /// Takes `num_plants` as given. Prefer [`TrayLayout::from_matrix`] unless
    /// the count is already known to match.
    pub fn new(num_plants: usize, matrix: Matrix<Slot>) -> Self {
        Self { num_plants, matrix }
    }

    /// Builds a layout whose plant count is the number of occupied slots.
    pub fn from_matrix(matrix: Matrix<Slot>) -> Self {
        Self {
            num_plants: count_occupied(&matrix),
            matrix,
        }
    }

    /// Whether `num_plants` matches the occupied slots in `matrix`.
    pub fn is_consistent(&self) -> bool {
        self.num_plants == count_occupied(&self.matrix)
    }
}

/// Tray dimensions are in inches.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseTray {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    /// Explicit volume. Absent or zero means width × length × height.
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub layout: Option<TrayLayout>,
}

impl BaseTray {
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
            volume: None,
            layout: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_layout(mut self, layout: TrayLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn volume(&self) -> f64 {
        match self.volume {
            Some(v) if v != 0.0 => v,
            _ => self.width * self.length * self.height,
        }
    }
}
