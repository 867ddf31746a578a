use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{FarmError, Result};
use crate::models::BaseTray;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseShelf {
    pub tray: BaseTray,
}

impl BaseShelf {
    pub fn new(tray: BaseTray) -> Self {
        Self { tray }
    }
}

/// A stack of shelves. Index 0 is the bottom shelf.
///
/// Dimensions are in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseShelvingUnit {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    #[serde(default)]
    shelves: Vec<BaseShelf>,
}

impl BaseShelvingUnit {
    pub fn new(width: f64, length: f64, height: f64, shelves: Vec<BaseShelf>) -> Self {
        Self {
            width,
            length,
            height,
            shelves,
        }
    }

    pub fn shelves(&self) -> &[BaseShelf] {
        &self.shelves
    }

    pub fn shelf(&self, index: usize) -> Option<&BaseShelf> {
        self.shelves.get(index)
    }

    pub fn shelf_mut(&mut self, index: usize) -> Option<&mut BaseShelf> {
        self.shelves.get_mut(index)
    }

    pub fn num_shelves(&self) -> usize {
        self.shelves.len()
    }

    /// Stacks a shelf on top of the current ones.
    pub fn add_shelf(&mut self, shelf: BaseShelf) {
        self.shelves.push(shelf);
        debug!("Added shelf, unit now has {} shelves", self.num_shelves());
    }

    /// Removes and returns the shelf at `index`, counting from the bottom.
    pub fn remove_shelf(&mut self, index: usize) -> Result<BaseShelf> {
        if index >= self.shelves.len() {
            return Err(FarmError::NonExistentTray { index });
        }
        let shelf = self.shelves.remove(index);
        debug!(
            "Removed shelf {index}, unit now has {} shelves",
            self.num_shelves()
        );
        Ok(shelf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_with_heights(heights: &[f64]) -> BaseShelvingUnit {
        let shelves = heights
            .iter()
            .map(|h| BaseShelf::new(BaseTray::new(12.0, 24.0, *h)))
            .collect();
        BaseShelvingUnit::new(36.0, 18.0, 72.0, shelves)
    }

    #[test]
    fn test_remove_shelf_removes_exactly_that_shelf() {
        let mut unit = unit_with_heights(&[4.0, 5.0, 6.0]);
        let removed = unit.remove_shelf(1).unwrap();
        assert_eq!(removed.tray.height, 5.0);
        assert_eq!(unit.num_shelves(), 2);
        assert_eq!(unit.shelf(0).unwrap().tray.height, 4.0);
        assert_eq!(unit.shelf(1).unwrap().tray.height, 6.0);
    }

    #[test]
    fn test_remove_shelf_out_of_range() {
        let mut unit = unit_with_heights(&[4.0, 5.0]);
        let err = unit.remove_shelf(2).unwrap_err();
        assert_eq!(err, FarmError::NonExistentTray { index: 2 });
        assert_eq!(unit.num_shelves(), 2);
    }

    #[test]
    fn test_remove_from_empty_unit() {
        let mut unit = unit_with_heights(&[]);
        assert!(unit.remove_shelf(0).is_err());
        assert_eq!(unit.num_shelves(), 0);
    }

    #[test]
    fn test_add_shelf_goes_on_top() {
        let mut unit = unit_with_heights(&[4.0]);
        unit.add_shelf(BaseShelf::new(BaseTray::new(12.0, 24.0, 9.0)));
        assert_eq!(unit.num_shelves(), 2);
        assert_eq!(unit.shelf(1).unwrap().tray.height, 9.0);
    }
}
