//! Configuration validation errors

use crate::float_types::Real;

/// All the problems [`Config::validate`](crate::config::Config::validate) can report.
///
/// The generation pipeline itself never fails; these only let a loader reject
/// a record before handing it over.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A dimension is NaN or infinite
    #[error("(NonFinite) `{field}` must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: Real },
    /// A size that has to be strictly positive (ring, wire, beam diameters)
    #[error("(NonPositive) `{field}` must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: Real },
    /// A gap, thickness or margin below zero
    #[error("(Negative) `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: Real },
}
