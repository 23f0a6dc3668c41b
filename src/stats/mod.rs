//! Statistics module for myds
//!
//! This module contains:
//! - Standard normal distribution primitives (density, CDF, inverse CDF)
//! - Central Limit Theorem estimators for sample size and margin of error

pub mod clt;
pub mod normal;

pub use clt::{
    error_from_confidence, error_from_sample_size, sample_size_from_confidence,
    sample_size_from_z, z_from_confidence,
};
pub use normal::{cdf, interval, linspace, pdf, ppf};
