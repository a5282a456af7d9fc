use ndarray::{Array1, ArrayView2, Axis};

use crate::prelude::{CascadeError, CascadeResult};

/// Refers every stage's input power limit back to the chain input and keeps
/// the most restrictive one per frequency point.
///
/// Stage `i` is shifted down by the summed gain of stages `0..i`; its own gain
/// and the gain of later stages play no part. Shared by P1dB, IP2, IP3 and
/// Pmax.
pub fn cascade_input_referred(
    gains: ArrayView2<f64>,
    values: ArrayView2<f64>,
) -> CascadeResult<Array1<f64>> {
    if gains.dim() != values.dim() {
        return Err(CascadeError::ShapeMismatch(format!(
            "gain is {:?} but input-referred values are {:?} (stages x points)",
            gains.dim(),
            values.dim()
        )));
    }
    if values.nrows() == 0 {
        return Err(CascadeError::ShapeMismatch(
            "input-referred cascade needs at least one stage".into(),
        ));
    }

    let mut preceding_gain = Array1::<f64>::zeros(values.ncols());
    let mut bottleneck = Array1::from_elem(values.ncols(), f64::INFINITY);
    for (stage, (stage_values, stage_gain)) in values
        .axis_iter(Axis(0))
        .zip(gains.axis_iter(Axis(0)))
        .enumerate()
    {
        let adjusted = &stage_values - &preceding_gain;
        if let Some(point) = adjusted.iter().position(|value| value.is_nan()) {
            return Err(CascadeError::NumericDomain(format!(
                "stage {} referred to the chain input is NaN at point {}",
                stage, point
            )));
        }
        bottleneck.zip_mut_with(&adjusted, |limit, &value| *limit = limit.min(value));
        preceding_gain += &stage_gain;
    }
    if let Some(point) = bottleneck.iter().position(|limit| !limit.is_finite()) {
        return Err(CascadeError::NumericDomain(format!(
            "input-referred limit {} at point {} is not finite",
            bottleneck[point], point
        )));
    }
    Ok(bottleneck)
}
