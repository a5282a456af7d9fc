use ndarray::Array2;

use crate::prelude::{CascadeError, CascadeResult};

pub struct MatrixHelper;

impl MatrixHelper {
    /// Stacks equal-length rows into a `rows x columns` array.
    ///
    /// Rows of differing length are rejected rather than padded or truncated.
    pub fn stack_rows(rows: &[&[f64]]) -> CascadeResult<Array2<f64>> {
        let columns = rows.first().map_or(0, |row| row.len());
        let mut flat = Vec::with_capacity(rows.len() * columns);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(CascadeError::ShapeMismatch(format!(
                    "row {} has {} values, expected {}",
                    idx,
                    row.len(),
                    columns
                )));
            }
            flat.extend_from_slice(row);
        }
        Array2::from_shape_vec((rows.len(), columns), flat)
            .map_err(|err| CascadeError::ShapeMismatch(err.to_string()))
    }
}
