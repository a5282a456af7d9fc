use ndarray::{Array1, ArrayView2, Axis};

use crate::math::units::{to_db, to_linear};
use crate::prelude::{CascadeError, CascadeResult};

/// Chain noise figure in dB per frequency point (Friis formula).
///
/// `gains` and `noise_figures` are `stages x points` arrays in dB, with row 0
/// the chain input. Each later stage's excess noise factor is divided by the
/// product of the linear gains ahead of it.
pub fn cascade_noise_figure(
    gains: ArrayView2<f64>,
    noise_figures: ArrayView2<f64>,
) -> CascadeResult<Array1<f64>> {
    if gains.dim() != noise_figures.dim() {
        return Err(CascadeError::ShapeMismatch(format!(
            "gain is {:?} but noise figure is {:?} (stages x points)",
            gains.dim(),
            noise_figures.dim()
        )));
    }
    if gains.nrows() == 0 {
        return Err(CascadeError::ShapeMismatch(
            "noise figure cascade needs at least one stage".into(),
        ));
    }

    let mut cascaded = Array1::zeros(gains.ncols());
    for (point, (gain_column, nf_column)) in gains
        .axis_iter(Axis(1))
        .zip(noise_figures.axis_iter(Axis(1)))
        .enumerate()
    {
        let mut factor = to_linear(nf_column[0]);
        let mut preceding_db = 0.0;
        for stage in 1..nf_column.len() {
            preceding_db += gain_column[stage - 1];
            let preceding_gain = to_linear(preceding_db);
            if preceding_gain == 0.0 {
                return Err(CascadeError::NumericDomain(format!(
                    "linear gain ahead of stage {} ({} dB) underflows to zero at point {}",
                    stage, preceding_db, point
                )));
            }
            factor += (to_linear(nf_column[stage]) - 1.0) / preceding_gain;
        }
        cascaded[point] = to_db(factor).map_err(|_| {
            CascadeError::NumericDomain(format!(
                "noise factor {} at point {} has no dB value",
                factor, point
            ))
        })?;
    }
    Ok(cascaded)
}
