use std::fmt;

use crate::round::MarkerColor;

/// Errors raised by sampling, density estimation and answer checking
#[derive(Debug, Clone, PartialEq)]
pub enum QuizError {
    /// A numeric parameter was non-finite or outside its domain
    InvalidInput {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Density estimation needs at least one sample point
    EmptySample,
    /// The submission left a marker color without a statistic
    Unanswered(MarkerColor),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::InvalidInput {
                parameter,
                value,
                reason,
            } => write!(f, "invalid {parameter} ({value}): {reason}"),
            QuizError::EmptySample => write!(f, "cannot estimate density of an empty sample"),
            QuizError::Unanswered(color) => {
                write!(f, "no statistic chosen for the {} marker", color.name())
            }
        }
    }
}

impl std::error::Error for QuizError {}

pub type Result<T> = std::result::Result<T, QuizError>;

/// Reject NaN and infinities for a named parameter.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuizError::InvalidInput {
            parameter,
            value,
            reason: "must be finite",
        })
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    ensure_finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(QuizError::InvalidInput {
            parameter,
            value,
            reason: "must be positive",
        })
    }
}
