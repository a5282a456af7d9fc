use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the seven frequency-indexed vectors carried by a [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Frequency,
    Gain,
    NoiseFigure,
    InputP1db,
    InputIp2,
    InputIp3,
    InputPmax,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Frequency,
        Metric::Gain,
        Metric::NoiseFigure,
        Metric::InputP1db,
        Metric::InputIp2,
        Metric::InputIp3,
        Metric::InputPmax,
    ];

    /// Input-referred power limits, all reduced by the same bottleneck rule.
    pub const INPUT_REFERRED: [Metric; 4] = [
        Metric::InputP1db,
        Metric::InputIp2,
        Metric::InputIp3,
        Metric::InputPmax,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Frequency => "frequency",
            Metric::Gain => "gain",
            Metric::NoiseFigure => "noise_figure",
            Metric::InputP1db => "input_p1db",
            Metric::InputIp2 => "input_ip2",
            Metric::InputIp3 => "input_ip3",
            Metric::InputPmax => "input_pmax",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Frequency => "Hz",
            Metric::Gain | Metric::NoiseFigure => "dB",
            Metric::InputP1db | Metric::InputIp2 | Metric::InputIp3 | Metric::InputPmax => "dBm",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Frequency-dependent characteristics of one RF component, or of a whole
/// chain once reduced by [`crate::processing::cascade`].
///
/// Every metric vector is indexed by the `frequency` axis. An empty metric
/// vector means the metric was never characterized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stage {
    frequency: Vec<f64>,
    gain: Vec<f64>,
    noise_figure: Vec<f64>,
    input_p1db: Vec<f64>,
    input_ip2: Vec<f64>,
    input_ip3: Vec<f64>,
    input_pmax: Vec<f64>,
}

impl Stage {
    pub fn builder() -> StageBuilder {
        StageBuilder::default()
    }

    /// Frequency axis in Hz.
    pub fn frequency(&self) -> &[f64] {
        &self.frequency
    }

    /// Power gain in dB.
    pub fn gain(&self) -> &[f64] {
        &self.gain
    }

    /// Noise figure in dB.
    pub fn noise_figure(&self) -> &[f64] {
        &self.noise_figure
    }

    /// Input-referred 1 dB compression point in dBm.
    pub fn input_p1db(&self) -> &[f64] {
        &self.input_p1db
    }

    /// Input-referred second-order intercept in dBm.
    pub fn input_ip2(&self) -> &[f64] {
        &self.input_ip2
    }

    /// Input-referred third-order intercept in dBm.
    pub fn input_ip3(&self) -> &[f64] {
        &self.input_ip3
    }

    /// Maximum safe input power in dBm.
    pub fn input_pmax(&self) -> &[f64] {
        &self.input_pmax
    }

    pub fn metric(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Frequency => &self.frequency,
            Metric::Gain => &self.gain,
            Metric::NoiseFigure => &self.noise_figure,
            Metric::InputP1db => &self.input_p1db,
            Metric::InputIp2 => &self.input_ip2,
            Metric::InputIp3 => &self.input_ip3,
            Metric::InputPmax => &self.input_pmax,
        }
    }

    pub fn num_points(&self) -> usize {
        self.frequency.len()
    }

    /// True when every vector is empty, e.g. the result of cascading nothing.
    pub fn is_empty(&self) -> bool {
        Metric::ALL.iter().all(|&m| self.metric(m).is_empty())
    }

    /// Checks that each characterized metric has one value per frequency point.
    pub fn validate(&self) -> CascadeResult<()> {
        let points = self.num_points();
        for metric in Metric::ALL.into_iter().skip(1) {
            let len = self.metric(metric).len();
            if len != 0 && len != points {
                return Err(CascadeError::ShapeMismatch(format!(
                    "{} has {} values but the frequency axis has {} points",
                    metric, len, points
                )));
            }
        }
        Ok(())
    }
}

/// Optional-vector constructor for [`Stage`]; anything left unset stays empty.
#[derive(Debug, Clone, Default)]
pub struct StageBuilder {
    stage: Stage,
}

impl StageBuilder {
    pub fn frequency(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.stage.frequency = values.into();
        self
    }

    pub fn gain(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.stage.gain = values.into();
        self
    }

    pub fn noise_figure(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.stage.noise_figure = values.into();
        self
    }

    pub fn input_p1db(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.stage.input_p1db = values.into();
        self
    }

    pub fn input_ip2(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.stage.input_ip2 = values.into();
        self
    }

    pub fn input_ip3(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.stage.input_ip3 = values.into();
        self
    }

    pub fn input_pmax(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.stage.input_pmax = values.into();
        self
    }

    pub fn metric(mut self, metric: Metric, values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        match metric {
            Metric::Frequency => self.stage.frequency = values,
            Metric::Gain => self.stage.gain = values,
            Metric::NoiseFigure => self.stage.noise_figure = values,
            Metric::InputP1db => self.stage.input_p1db = values,
            Metric::InputIp2 => self.stage.input_ip2 = values,
            Metric::InputIp3 => self.stage.input_ip3 = values,
            Metric::InputPmax => self.stage.input_pmax = values,
        }
        self
    }

    pub fn build(self) -> Stage {
        self.stage
    }
}

/// Common error type for cascade reductions.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CascadeError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("numeric domain error: {0}")]
    NumericDomain(String),
}

pub type CascadeResult<T> = Result<T, CascadeError>;
