use log::debug;

use crate::error::{FarmError, Result};
use crate::models::{count_occupied, Matrix, Row, Slot, TrayLayout};

/// Mutable builder for a tray's netcup matrix.
///
/// Rows are indexed from 0 going left to right; slots within a row from 0
/// going front to back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixFactory {
    rows: Matrix<Slot>,
}

impl MatrixFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Matrix<Slot>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, row_index: usize) -> Option<&Row> {
        self.rows.get(row_index)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Occupied slots across all rows.
    pub fn num_plants(&self) -> usize {
        count_occupied(&self.rows)
    }

    /// Inserts `row` at `row_index`, shifting later rows right.
    /// An index past the end appends.
    pub fn add_row(&mut self, row: Row, row_index: usize) {
        let at = row_index.min(self.rows.len());
        self.rows.insert(at, row);
        debug!("Added row at index {at}, matrix now has {} rows", self.num_rows());
    }

    pub fn remove_row(&mut self, row_index: usize) -> Result<Row> {
        if row_index >= self.rows.len() {
            return Err(FarmError::NonExistentRow { row_index });
        }
        let row = self.rows.remove(row_index);
        debug!(
            "Removed row {row_index}, matrix now has {} rows",
            self.num_rows()
        );
        Ok(row)
    }

    /// Removes the slot at `plant_index` from row `row_index` and returns it.
    ///
    /// The row index is checked first: when both are out of range the error
    /// is [`FarmError::NonExistentRow`].
    pub fn remove_plant_from_row(&mut self, row_index: usize, plant_index: usize) -> Result<Slot> {
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(FarmError::NonExistentRow { row_index })?;
        if plant_index >= row.len() {
            return Err(FarmError::NonExistentPlant { plant_index });
        }
        let slot = row.remove(plant_index);
        debug!("Removed slot {plant_index} from row {row_index}");
        Ok(slot)
    }

    /// Point-in-time copy of the current matrix.
    pub fn layout(&self) -> TrayLayout {
        TrayLayout::from_matrix(self.rows.clone())
    }
}
