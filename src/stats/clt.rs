//! Central Limit Theorem estimators
//!
//! Sample means are treated as normally distributed, so the margin of error
//! of a mean estimated from `n` samples is `z * std / sqrt(n)`. Solving that
//! for `n` gives the required sample size. Inputs are not validated.

use crate::stats::normal::interval;

/// z-multiplier for a two-sided confidence level
///
/// This is the upper bound of the central interval holding `confidence` of
/// the probability mass, i.e. `ppf(1 - (1 - confidence) / 2)`.
pub fn z_from_confidence(confidence: f64) -> f64 {
    interval(confidence).1
}

/// Sample size required for a z-multiplier, standard deviation and maximum error
///
/// # Examples
///
/// ```
/// use myds::stats::sample_size_from_z;
///
/// assert_eq!(sample_size_from_z(2.0, 10.0, 1.0), 400.0);
/// ```
pub fn sample_size_from_z(z: f64, std: f64, max_error: f64) -> f64 {
    (z * std / max_error).powi(2)
}

/// Sample size required for a confidence level, standard deviation and maximum error
pub fn sample_size_from_confidence(confidence: f64, std: f64, max_error: f64) -> f64 {
    sample_size_from_z(z_from_confidence(confidence), std, max_error)
}

/// Maximum error for a sample size, z-multiplier and standard deviation
pub fn error_from_sample_size(sample_size: f64, z: f64, std: f64) -> f64 {
    z * std / sample_size.sqrt()
}

/// Maximum error for a sample size, confidence level and standard deviation
pub fn error_from_confidence(sample_size: f64, confidence: f64, std: f64) -> f64 {
    error_from_sample_size(sample_size, z_from_confidence(confidence), std)
}
