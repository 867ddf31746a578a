pub mod inventory;
pub mod journal;
pub mod matrix;

pub use matrix::MatrixFactory;
