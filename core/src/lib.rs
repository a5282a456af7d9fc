//! Cascade engine for RF signal-path budgets.
//!
//! Folds an ordered chain of frequency-indexed stages (amplifiers, filters,
//! mixers, attenuators) into one equivalent stage: summed gain, Friis noise
//! figure, and input-referred P1dB, IP2, IP3 and Pmax limited by the
//! bottleneck stage.

pub mod display;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use display::FrequencyScale;
pub use math::units::{to_db, to_linear};
pub use prelude::{CascadeError, CascadeResult, Metric, Stage, StageBuilder};
pub use processing::{
    cascade, cascade_gain, cascade_input_referred, cascade_noise_figure, cascade_progressive,
};
