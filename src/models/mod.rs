pub mod event;
pub mod netcup;
pub mod plant;
pub mod shelf;
pub mod tray;

pub use event::PlantEvent;
pub use netcup::NetCupPlant;
pub use plant::Plant;
pub use shelf::{BaseShelf, BaseShelvingUnit};
pub use tray::{BaseTray, TrayLayout};

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// One netcup position in a row. `None` is an empty position.
pub type Slot = Option<NetCupPlant>;

/// Netcup positions ordered left to right.
pub type Row = Vec<Slot>;

/// Number of occupied slots in a matrix.
pub fn count_occupied(matrix: &[Row]) -> usize {
    matrix
        .iter()
        .flat_map(|r| r.iter())
        .filter(|slot| slot.is_some())
        .count()
}
