//! The relation solver.
//!
//! Given exactly two of $\beta$, $n_{\text{eff}}$ and $\lambda$, the solver
//! derives the third from
//!
//! $$\beta = n_{\text{eff}} \frac{2\pi}{\lambda}$$
//!
//! with $\lambda$ in metres. An empty wavelength is first resolved from the
//! frequency field, so $(\beta, f)$ and $(n_{\text{eff}}, f)$ are valid input
//! pairs too.
//!
//! Solving is pure: the solver reads field text and returns a [`Solution`]
//! describing what to write. Applying it is the session's job, which is why
//! a rejected solve can never leave a half-written form behind.

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::error::SolveError;
use crate::types::{Field, FieldSet, SlotValue};
use crate::units::{format_fixed, wavelength_text_for, METRES_PER_NM, NM_PER_METRE};

/// Formula line shown before the first solve and after a failure.
pub const FORMULA_PLACEHOLDER: &str = "formula will be shown here";

/// The form of the phase relation that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// $\beta = n_{\text{eff}} \cdot 2\pi / \lambda$
    Beta,
    /// $n_{\text{eff}} = \beta \lambda / 2\pi$
    Neff,
    /// $\lambda = n_{\text{eff}} \cdot 2\pi / \beta$
    Wavelength,
}

impl Formula {
    /// The field this formula solves for.
    pub fn target(self) -> Field {
        match self {
            Formula::Beta => Field::Beta,
            Formula::Neff => Field::Neff,
            Formula::Wavelength => Field::Wavelength,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Formula::Beta => "β = n_eff · 2π / λ",
            Formula::Neff => "n_eff = (β · λ) / 2π",
            Formula::Wavelength => "λ = (n_eff · 2π) / β",
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Relation that was applied. Its target is the field to write.
    pub formula: Formula,
    /// Solved value in display units (rad/m, dimensionless, or nm).
    pub value: f64,
    /// `value` formatted to the target field's display precision.
    pub text: String,
    /// Wavelength text derived from the frequency field, when the
    /// wavelength field was empty.
    pub resolved_wavelength: Option<String>,
}

impl Solution {
    pub fn target(&self) -> Field {
        self.formula.target()
    }
}

/// Solver for the waveguide phase relation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationSolver;

impl RelationSolver {
    /// Solve from the four raw field texts.
    ///
    /// # Errors
    /// - [`SolveError::Parse`] if β, n_eff or the (resolved) wavelength text
    ///   is present but not a number. This is checked before counting.
    /// - [`SolveError::InputCount`] unless exactly one of the three is unset.
    /// - [`SolveError::InvalidOperand`] for λ = 0 when solving for β, or
    ///   β = 0 when solving for λ.
    /// - [`SolveError::NonFinite`] if the result is infinite or NaN.
    pub fn solve(
        &self,
        beta: &str,
        neff: &str,
        wavelength: &str,
        frequency: &str,
    ) -> Result<Solution, SolveError> {
        let resolved_wavelength = if SlotValue::parse(wavelength).is_unset() {
            Some(wavelength_text_for(frequency)).filter(|text| !text.is_empty())
        } else {
            None
        };
        let wavelength = resolved_wavelength.as_deref().unwrap_or(wavelength);

        let beta = parse_present(Field::Beta, beta)?;
        let neff = parse_present(Field::Neff, neff)?;
        let wavelength_nm = parse_present(Field::Wavelength, wavelength)?;

        let supplied = [beta, neff, wavelength_nm]
            .iter()
            .filter(|v| v.is_some())
            .count();
        if supplied != 2 {
            return Err(SolveError::InputCount { supplied });
        }

        let (formula, value) = match (beta, neff, wavelength_nm) {
            (None, Some(neff), Some(nm)) => {
                let wavelength_m = nm * METRES_PER_NM;
                if wavelength_m == 0.0 {
                    return Err(SolveError::InvalidOperand {
                        quantity: Field::Wavelength,
                    });
                }
                (Formula::Beta, neff * 2.0 * PI / wavelength_m)
            }
            (Some(beta), None, Some(nm)) => {
                let wavelength_m = nm * METRES_PER_NM;
                (Formula::Neff, beta * wavelength_m / (2.0 * PI))
            }
            (Some(beta), Some(neff), None) => {
                if beta == 0.0 {
                    return Err(SolveError::InvalidOperand {
                        quantity: Field::Beta,
                    });
                }
                let wavelength_m = neff * 2.0 * PI / beta;
                (Formula::Wavelength, wavelength_m * NM_PER_METRE)
            }
            _ => return Err(SolveError::InputCount { supplied }),
        };

        let target = formula.target();
        if !value.is_finite() {
            return Err(SolveError::NonFinite { target });
        }

        log::debug!("solved {target} = {value} using {formula}");
        Ok(Solution {
            formula,
            value,
            text: format_fixed(value, target.decimals()),
            resolved_wavelength,
        })
    }

    /// Solve from the current contents of a [`FieldSet`].
    pub fn solve_fields(&self, fields: &FieldSet) -> Result<Solution, SolveError> {
        self.solve(
            fields.text(Field::Beta),
            fields.text(Field::Neff),
            fields.text(Field::Wavelength),
            fields.text(Field::Frequency),
        )
    }
}

/// `Ok(None)` for empty text, `Ok(Some(v))` for a number, `Err` otherwise.
fn parse_present(field: Field, text: &str) -> Result<Option<f64>, SolveError> {
    match SlotValue::parse(text) {
        SlotValue::Unset => Ok(None),
        SlotValue::Value(v) => Ok(Some(v)),
        SlotValue::Malformed => Err(SolveError::Parse { field }),
    }
}
