use ndarray::Array2;

use crate::math::matrix::MatrixHelper;
use crate::prelude::{CascadeError, CascadeResult, Metric, Stage};
use crate::processing::gain::cascade_gain;
use crate::processing::input_referred::cascade_input_referred;
use crate::processing::noise::cascade_noise_figure;
use crate::telemetry::log::LogManager;

/// Reduces an ordered chain of stages (index 0 at the chain input) into one
/// aggregate stage.
///
/// An empty chain yields an empty stage. The aggregate frequency axis is taken
/// from the first stage; every other stage must share it exactly.
pub fn cascade(stages: &[Stage]) -> CascadeResult<Stage> {
    let logger = LogManager::new();
    let Some(first) = stages.first() else {
        logger.record("empty chain, returning empty stage");
        return Ok(Stage::default());
    };

    let aggregate = reduce_chain(first, stages, &logger).map_err(|err| {
        logger.record_rejection(&err);
        err
    })?;
    logger.record(&format!(
        "cascaded {} stages over {} frequency points",
        stages.len(),
        aggregate.num_points()
    ));
    Ok(aggregate)
}

fn reduce_chain(first: &Stage, stages: &[Stage], logger: &LogManager) -> CascadeResult<Stage> {
    check_alignment(stages)?;

    let gains = stack_metric(stages, Metric::Gain)?;
    let mut builder = Stage::builder().frequency(first.frequency());
    if let Some(gains) = &gains {
        builder = builder.gain(cascade_gain(gains.view()).to_vec());
    }

    for metric in std::iter::once(Metric::NoiseFigure).chain(Metric::INPUT_REFERRED) {
        let Some(values) = stack_metric(stages, metric)? else {
            continue;
        };
        let gains = gains.as_ref().ok_or_else(|| {
            CascadeError::ShapeMismatch(format!("{} is characterized but gain is not", metric))
        })?;
        let reduced = match metric {
            Metric::NoiseFigure => cascade_noise_figure(gains.view(), values.view())?,
            _ => cascade_input_referred(gains.view(), values.view())?,
        };
        logger.detail(&format!("{} reduced over {} stages", metric, stages.len()));
        builder = builder.metric(metric, reduced.to_vec());
    }

    Ok(builder.build())
}

/// Running cascade: element `k` is the aggregate of stages `0..=k`.
pub fn cascade_progressive(stages: &[Stage]) -> CascadeResult<Vec<Stage>> {
    (1..=stages.len())
        .map(|end| cascade(&stages[..end]))
        .collect()
}

/// Stacks one metric across the chain into a `stages x points` array.
///
/// Returns `None` when no stage characterizes the metric. A metric present on
/// some stages but not others, or of the wrong length, is a shape mismatch.
pub fn stack_metric(stages: &[Stage], metric: Metric) -> CascadeResult<Option<Array2<f64>>> {
    let rows: Vec<&[f64]> = stages.iter().map(|stage| stage.metric(metric)).collect();
    if rows.iter().all(|row| row.is_empty()) {
        return Ok(None);
    }
    for (idx, (row, stage)) in rows.iter().zip(stages).enumerate() {
        if row.len() != stage.num_points() {
            return Err(CascadeError::ShapeMismatch(format!(
                "stage {} has {} {} values for {} frequency points",
                idx,
                row.len(),
                metric,
                stage.num_points()
            )));
        }
    }
    MatrixHelper::stack_rows(&rows).map(Some)
}

fn check_alignment(stages: &[Stage]) -> CascadeResult<()> {
    let reference = stages.first().map(Stage::frequency).unwrap_or_default();
    for (idx, stage) in stages.iter().enumerate() {
        stage
            .validate()
            .map_err(|err| match err {
                CascadeError::ShapeMismatch(msg) => {
                    CascadeError::ShapeMismatch(format!("stage {}: {}", idx, msg))
                }
                other => other,
            })?;
        if stage.frequency() != reference {
            return Err(CascadeError::ShapeMismatch(format!(
                "stage {} frequency axis ({} points) differs from stage 0 ({} points)",
                idx,
                stage.num_points(),
                reference.len()
            )));
        }
    }
    Ok(())
}
