//! Error taxonomy for the relation solver and the notifications front ends
//! show for it.

use serde::Serialize;
use thiserror::Error;

use crate::types::Field;

/// Notification title for errors caused by what the user typed.
pub const INPUT_ERROR_TITLE: &str = "Input Error";

/// Notification title for errors raised by the arithmetic itself.
pub const CALCULATION_ERROR_TITLE: &str = "Calculation Error";

/// Reasons a solve can be rejected.
///
/// None of these are fatal. A failed solve leaves every field as it was and
/// resets the formula line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A field holds text that is neither empty nor a number.
    #[error("please enter valid numeric values")]
    Parse { field: Field },

    /// Not exactly one of β, n_eff and λ is unset.
    #[error("exactly two of the three quantities must be supplied")]
    InputCount { supplied: usize },

    /// A divisor required by the selected relation is zero.
    #[error("{} must not be zero", .quantity.name())]
    InvalidOperand { quantity: Field },

    /// The relation produced an infinite or NaN result.
    #[error("the input values produced a non-finite result, please check the input")]
    NonFinite { target: Field },
}

impl SolveError {
    /// Title of the modal notification for this error.
    pub fn title(&self) -> &'static str {
        match self {
            SolveError::Parse { .. }
            | SolveError::InputCount { .. }
            | SolveError::InvalidOperand { .. } => INPUT_ERROR_TITLE,
            SolveError::NonFinite { .. } => CALCULATION_ERROR_TITLE,
        }
    }
}

/// A blocking `(title, message)` pair for the UI to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl From<&SolveError> for Notification {
    fn from(err: &SolveError) -> Self {
        Self {
            title: err.title().to_owned(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SolveError::InvalidOperand { quantity: Field::Wavelength }.to_string(),
            "wavelength must not be zero"
        );
        assert_eq!(
            SolveError::InvalidOperand { quantity: Field::Beta }.to_string(),
            "propagation constant must not be zero"
        );
        assert_eq!(
            SolveError::InputCount { supplied: 3 }.to_string(),
            "exactly two of the three quantities must be supplied"
        );
    }

    #[test]
    fn test_notification_titles() {
        let parse = Notification::from(&SolveError::Parse { field: Field::Neff });
        assert_eq!(parse.title, INPUT_ERROR_TITLE);
        assert_eq!(parse.message, "please enter valid numeric values");

        let overflow = Notification::from(&SolveError::NonFinite { target: Field::Beta });
        assert_eq!(overflow.title, CALCULATION_ERROR_TITLE);
    }
}
