pub mod matrix;
pub mod units;

pub use matrix::MatrixHelper;
pub use units::{to_db, to_linear};
