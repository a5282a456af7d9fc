pub mod cascade;
pub mod gain;
pub mod input_referred;
pub mod noise;

pub use cascade::{cascade, cascade_progressive, stack_metric};
pub use gain::cascade_gain;
pub use input_referred::cascade_input_referred;
pub use noise::cascade_noise_figure;
