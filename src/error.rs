//! Errors raised by shelving-unit, matrix and plant operations.

use thiserror::Error;

/// Result type alias for farmhouse operations
pub type Result<T> = std::result::Result<T, FarmError>;

/// Positional lookups that miss, and plant rules that would be broken.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FarmError {
    /// No shelf at the given index. The name is historical: it reports a
    /// missing shelf, not a missing tray.
    #[error(
        "No shelf exists at index {index}. Remember that shelves are indexed starting at 0 counting from the bottom up"
    )]
    NonExistentTray { index: usize },

    #[error(
        "No row was found at row index {row_index}. Remember row indexing increments from 0 going left to right."
    )]
    NonExistentRow { row_index: usize },

    #[error(
        "No plant was found at plant index {plant_index}. Remember that plant indexing increments from 0 going from front to back"
    )]
    NonExistentPlant { plant_index: usize },

    #[error(
        "Plant distance from light would be {distance} inches, measured from top of plant it must be at least 1 inch"
    )]
    TooLowLight { distance: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_names_the_index() {
        let msg = FarmError::NonExistentRow { row_index: 7 }.to_string();
        assert!(msg.contains("row index 7"), "got: {msg}");
    }

    #[test]
    fn test_plant_error_names_the_index() {
        let msg = FarmError::NonExistentPlant { plant_index: 3 }.to_string();
        assert!(msg.contains("plant index 3"), "got: {msg}");
    }

    #[test]
    fn test_tray_error_mentions_shelf() {
        let msg = FarmError::NonExistentTray { index: 2 }.to_string();
        assert!(msg.contains("No shelf exists at index 2"), "got: {msg}");
    }
}
