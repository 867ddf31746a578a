//! Inventory model for a hydroponics shelving unit: shelves, trays, netcup
//! grids and the plants growing in them.

pub mod error;
pub mod logic;
pub mod models;

pub use error::{FarmError, Result};
