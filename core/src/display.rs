//! Human-readable rendering of a [`Stage`] for diagnostics.

use std::fmt;

use crate::prelude::{Metric, Stage};

/// Display unit for a frequency axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyScale {
    Hz,
    KHz,
    MHz,
    GHz,
}

impl FrequencyScale {
    /// Largest first, the order in which scales are tried.
    const DESCENDING: [FrequencyScale; 4] = [
        FrequencyScale::GHz,
        FrequencyScale::MHz,
        FrequencyScale::KHz,
        FrequencyScale::Hz,
    ];

    pub fn factor(self) -> f64 {
        match self {
            FrequencyScale::Hz => 1.0,
            FrequencyScale::KHz => 1e3,
            FrequencyScale::MHz => 1e6,
            FrequencyScale::GHz => 1e9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FrequencyScale::Hz => "Hz",
            FrequencyScale::KHz => "kHz",
            FrequencyScale::MHz => "MHz",
            FrequencyScale::GHz => "GHz",
        }
    }

    /// Picks the largest unit that keeps the smallest value at or above 1.
    /// Falls back to Hz for an empty axis or one with values below 1 Hz.
    pub fn select(frequency: &[f64]) -> Self {
        let smallest = frequency.iter().copied().fold(f64::INFINITY, f64::min);
        if !smallest.is_finite() {
            return FrequencyScale::Hz;
        }
        Self::DESCENDING
            .into_iter()
            .find(|scale| smallest / scale.factor() >= 1.0)
            .unwrap_or(FrequencyScale::Hz)
    }
}

/// Formats values as `{:7.3}`, keeping the first three and last two when
/// there are more than five.
pub fn format_values(values: &[f64]) -> String {
    let join = |slice: &[f64]| {
        slice
            .iter()
            .map(|v| format!("{:7.3}", v))
            .collect::<Vec<_>>()
            .join(" ")
    };
    if values.len() > 5 {
        format!("{} ... {}", join(&values[..3]), join(&values[values.len() - 2..]))
    } else {
        join(values)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = FrequencyScale::select(self.frequency());
        let scaled: Vec<f64> = self
            .frequency()
            .iter()
            .map(|v| v / scale.factor())
            .collect();
        writeln!(
            f,
            "Stage({:<12}=[ {}] {} ({} points),",
            Metric::Frequency.label(),
            format_values(&scaled),
            scale.label(),
            self.num_points()
        )?;

        for metric in Metric::ALL.into_iter().skip(1) {
            let separator = if metric == Metric::InputPmax { "" } else { "," };
            writeln!(
                f,
                "      {:<12}=[ {}] {}{}",
                metric.label(),
                format_values(self.metric(metric)),
                metric.unit(),
                separator
            )?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_picks_largest_unit_above_one() {
        assert_eq!(FrequencyScale::select(&[1.0e9, 6.0e9]), FrequencyScale::GHz);
        assert_eq!(FrequencyScale::select(&[900.0e6, 2.4e9]), FrequencyScale::MHz);
        assert_eq!(FrequencyScale::select(&[10.0e3]), FrequencyScale::KHz);
        assert_eq!(FrequencyScale::select(&[50.0, 1.0e6]), FrequencyScale::Hz);
        assert_eq!(FrequencyScale::select(&[0.5]), FrequencyScale::Hz);
        assert_eq!(FrequencyScale::select(&[]), FrequencyScale::Hz);
    }

    #[test]
    fn short_vectors_are_shown_in_full() {
        assert_eq!(format_values(&[1.0, -2.5]), "  1.000  -2.500");
        assert_eq!(format_values(&[]), "");
    }

    #[test]
    fn long_vectors_are_abbreviated() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(
            format_values(&values),
            "  1.000   2.000   3.000 ...   5.000   6.000"
        );
    }

    #[test]
    fn stage_rendering_lists_every_metric() {
        let stage = Stage::builder()
            .frequency(vec![1.0e9, 1.5e9])
            .gain(vec![20.0, 19.5])
            .noise_figure(vec![0.8, 0.9])
            .build();
        let rendered = stage.to_string();

        assert!(rendered.starts_with("Stage(frequency   =[   1.000   1.500] GHz (2 points),"));
        assert!(rendered.contains("gain        =[  20.000  19.500] dB,"));
        assert!(rendered.contains("input_pmax  =[ ] dBm\n)"));
        assert_eq!(rendered.lines().count(), 8);
    }
}
