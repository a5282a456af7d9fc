//! Decibel conversions for power ratios.

use crate::prelude::{CascadeError, CascadeResult};

/// Power ratio in dB to a linear power ratio, `10^(db/10)`. Always positive
/// for finite input.
pub fn to_linear(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// Linear power ratio to dB, `10 * log10(linear)`.
///
/// Non-positive or non-finite ratios have no finite dB value and are rejected.
pub fn to_db(linear: f64) -> CascadeResult<f64> {
    if !linear.is_finite() || linear <= 0.0 {
        return Err(CascadeError::NumericDomain(format!(
            "cannot express linear ratio {} in dB",
            linear
        )));
    }
    Ok(10.0 * linear.log10())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_linear_matches_known_ratios() {
        assert!((to_linear(10.0) - 10.0).abs() < 1e-12);
        assert!((to_linear(0.0) - 1.0).abs() < 1e-12);
        assert!((to_linear(-20.0) - 0.01).abs() < 1e-15);
        assert!((to_linear(3.0) - 1.995_262_314_968_879_5).abs() < 1e-12);
    }

    #[test]
    fn to_linear_is_always_positive() {
        for db in [-300.0, -120.5, -3.0, 0.0, 0.1, 27.0, 300.0] {
            assert!(to_linear(db) > 0.0, "to_linear({}) not positive", db);
        }
    }

    #[test]
    fn round_trip_recovers_input() {
        for db in [-150.0, -37.25, -1.0, 0.0, 0.5, 3.0, 12.75, 99.9, 250.0] {
            let back = to_db(to_linear(db)).unwrap();
            assert!((back - db).abs() < 1e-9, "{} came back as {}", db, back);
        }
    }

    #[test]
    fn to_db_rejects_non_positive_and_non_finite() {
        for linear in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                to_db(linear),
                Err(CascadeError::NumericDomain(_))
            ));
        }
    }
}
