use ndarray::{Array1, ArrayView2, Axis};

/// Total chain gain in dB per frequency point.
///
/// Rows are stages and columns are frequency points. Linear gains multiply,
/// so the dB values simply add and stage order does not matter. Each column
/// is summed in sorted order so any permutation of stages gives bit-identical
/// results.
pub fn cascade_gain(gains: ArrayView2<f64>) -> Array1<f64> {
    gains
        .axis_iter(Axis(1))
        .map(|column| {
            let mut values = column.to_vec();
            values.sort_by(f64::total_cmp);
            values.iter().sum::<f64>()
        })
        .collect()
}
