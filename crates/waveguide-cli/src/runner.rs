//! One-shot solve and conversion commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use waveguide_core::history::HistoryRecord;
use waveguide_core::solver::Formula;
use waveguide_core::types::FieldSet;
use waveguide_core::units::{frequency_text_for, wavelength_text_for};
use waveguide_core::{Calculator, Event, Field};

/// Raw field text from the command line. Values are passed through
/// untouched so that validation happens in the engine.
#[derive(Debug, Default, Args)]
pub struct SolveInputs {
    /// Propagation constant β (rad/m).
    #[arg(long, allow_hyphen_values = true)]
    pub beta: Option<String>,
    /// Effective refractive index n_eff.
    #[arg(long, allow_hyphen_values = true)]
    pub neff: Option<String>,
    /// Wavelength λ (nm).
    #[arg(long, allow_hyphen_values = true)]
    pub wavelength: Option<String>,
    /// Frequency f (THz), used when no wavelength is given.
    #[arg(long, allow_hyphen_values = true)]
    pub frequency: Option<String>,
}

impl SolveInputs {
    fn to_fields(&self) -> FieldSet {
        let mut fields = FieldSet::default();
        let inputs = [
            (Field::Beta, &self.beta),
            (Field::Neff, &self.neff),
            (Field::Wavelength, &self.wavelength),
            (Field::Frequency, &self.frequency),
        ];
        for (field, text) in inputs {
            if let Some(text) = text {
                fields.set(field, text.as_str());
            }
        }
        fields
    }
}

/// Result of a one-shot solve.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub solved: Field,
    pub formula: Formula,
    pub fields: HistoryRecord,
}

/// Solve from the given inputs.
pub fn solve(inputs: &SolveInputs) -> Result<SolveReport> {
    let mut calc = Calculator::with_fields(inputs.to_fields());
    let outcome = calc.handle(Event::Calculate);

    if let Some(notification) = outcome.notification {
        anyhow::bail!("{}: {}", notification.title, notification.message);
    }
    let (Some(formula), Some(fields)) = (calc.formula(), outcome.record) else {
        anyhow::bail!("solve produced no result");
    };

    Ok(SolveReport {
        solved: formula.target(),
        formula,
        fields,
    })
}

pub fn print_report(report: &SolveReport) {
    println!("Formula: {}", report.formula);
    let rows = [
        (Field::Beta, &report.fields.beta),
        (Field::Neff, &report.fields.neff),
        (Field::Wavelength, &report.fields.wavelength),
        (Field::Frequency, &report.fields.frequency),
    ];
    for (field, text) in rows {
        let marker = if field == report.solved { "*" } else { " " };
        println!("{marker} {:<40} {}", field.label(), text);
    }
}

/// `λ = <text> nm -> f = <f> THz`
pub fn convert_wavelength(text: &str) -> Result<String> {
    let frequency = frequency_text_for(text);
    if frequency.is_empty() {
        anyhow::bail!("wavelength must be a positive number, got {text:?}");
    }
    Ok(format!("λ = {} nm -> f = {frequency} THz", text.trim()))
}

/// `f = <text> THz -> λ = <λ> nm`
pub fn convert_frequency(text: &str) -> Result<String> {
    let wavelength = wavelength_text_for(text);
    if wavelength.is_empty() {
        anyhow::bail!("frequency must be a positive number, got {text:?}");
    }
    Ok(format!("f = {} THz -> λ = {wavelength} nm", text.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_report() {
        let inputs = SolveInputs {
            neff: Some("2.5".into()),
            wavelength: Some("1550".into()),
            ..Default::default()
        };
        let report = solve(&inputs).unwrap();
        assert_eq!(report.solved, Field::Beta);
        assert_eq!(report.fields.frequency, "193.41");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["solved"], "beta");
        assert_eq!(json["formula"], "beta");
        assert_eq!(json["fields"]["wavelength"], "1550");
    }

    #[test]
    fn test_solve_from_frequency() {
        let inputs = SolveInputs {
            beta: Some("1e7".into()),
            frequency: Some("193.10".into()),
            ..Default::default()
        };
        let report = solve(&inputs).unwrap();
        assert_eq!(report.solved, Field::Neff);
        assert_eq!(report.fields.wavelength, "1552.52");
    }

    #[test]
    fn test_solve_error_carries_title() {
        let err = solve(&SolveInputs::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input Error: exactly two of the three quantities must be supplied"
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(convert_wavelength("1550").unwrap(), "λ = 1550 nm -> f = 193.41 THz");
        assert_eq!(convert_frequency("193.1").unwrap(), "f = 193.1 THz -> λ = 1552.52 nm");
        assert!(convert_wavelength("-3").is_err());
    }
}
