//! Event handling for an interactive calculator session.
//!
//! A [`Calculator`] owns the four field slots, the unit synchronizer, the
//! formula line and the history log. Front ends deliver user actions as
//! [`Event`]s and render the returned [`Outcome`]; all state is private to
//! the session and discarded with it.

use crate::error::{Notification, SolveError};
use crate::history::{History, HistoryRecord};
use crate::solver::{Formula, RelationSolver, FORMULA_PLACEHOLDER};
use crate::types::{Field, FieldSet};
use crate::units::{FieldHost, UnitSynchronizer};

/// A user action delivered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// New text in one of the fields.
    Edit(Field, String),
    /// The Calculate button.
    Calculate,
    /// Empty every field, the formula line and the history.
    ClearAll,
    /// Empty a single field.
    ClearField(Field),
    /// The shared clear button of the wavelength/frequency pair.
    ClearWavelengthAndFrequency,
}

/// What an event changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Fields whose text differs from before the event, in form order.
    pub changed: Vec<Field>,
    /// Blocking notification to show, if the event failed.
    pub notification: Option<Notification>,
    /// History record appended by a successful solve.
    pub record: Option<HistoryRecord>,
}

#[derive(Debug, Default)]
pub struct Calculator {
    fields: FieldSet,
    sync: UnitSynchronizer,
    solver: RelationSolver,
    formula: Option<Formula>,
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from pre-filled fields.
    ///
    /// The fields are taken as-is, without synchronizing wavelength and
    /// frequency, the way a one-shot form submission delivers them.
    pub fn with_fields(fields: FieldSet) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn text(&self, field: Field) -> &str {
        self.fields.text(field)
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// The last applied formula, if the last solve succeeded.
    pub fn formula(&self) -> Option<Formula> {
        self.formula
    }

    /// Formula line text, or the placeholder.
    pub fn formula_text(&self) -> &'static str {
        self.formula.map_or(FORMULA_PLACEHOLDER, Formula::as_str)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply one event and report what changed.
    pub fn handle(&mut self, event: Event) -> Outcome {
        let before = self.fields.clone();
        let mut outcome = Outcome::default();

        match event {
            Event::Edit(field, text) => self.write(field, text),
            Event::Calculate => match self.calculate() {
                Ok(record) => outcome.record = Some(record),
                Err(err) => {
                    log::warn!("solve rejected: {err}");
                    self.formula = None;
                    outcome.notification = Some(Notification::from(&err));
                }
            },
            Event::ClearAll => self.clear_all(),
            Event::ClearField(field) => self.write(field, String::new()),
            Event::ClearWavelengthAndFrequency => {
                self.write(Field::Wavelength, String::new());
                self.write(Field::Frequency, String::new());
            }
        }

        outcome.changed = Field::ALL
            .into_iter()
            .filter(|&field| before.text(field) != self.fields.text(field))
            .collect();
        outcome
    }

    fn write(&mut self, field: Field, text: String) {
        self.fields.write_field(field, text, &mut self.sync);
    }

    fn calculate(&mut self) -> Result<HistoryRecord, SolveError> {
        let solution = self.solver.solve_fields(&self.fields)?;

        if solution.resolved_wavelength.is_some() {
            let frequency = self.fields.text(Field::Frequency).to_owned();
            self.sync.on_frequency_changed(&frequency, &mut self.fields);
        }

        self.write(solution.target(), solution.text.clone());
        self.formula = Some(solution.formula);

        // The frequency field follows the wavelength, whichever field was
        // just solved for.
        let wavelength = self.fields.text(Field::Wavelength).to_owned();
        self.sync.on_wavelength_changed(&wavelength, &mut self.fields);

        let record = HistoryRecord::from_fields(&self.fields);
        log::info!("{}", record.to_line());
        self.history.push(record.clone());
        Ok(record)
    }

    fn clear_all(&mut self) {
        for field in Field::ALL {
            self.write(field, String::new());
        }
        self.formula = None;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(calc: &mut Calculator, field: Field, text: &str) -> Outcome {
        calc.handle(Event::Edit(field, text.to_owned()))
    }

    #[test]
    fn test_wavelength_edit_updates_frequency() {
        let mut calc = Calculator::new();
        let outcome = edit(&mut calc, Field::Wavelength, "1550");
        assert_eq!(outcome.changed, [Field::Wavelength, Field::Frequency]);
        assert_eq!(calc.text(Field::Frequency), "193.41");

        let outcome = edit(&mut calc, Field::Frequency, "");
        assert_eq!(outcome.changed, [Field::Wavelength, Field::Frequency]);
        assert_eq!(calc.text(Field::Wavelength), "");
    }

    #[test]
    fn test_beta_edit_touches_only_beta() {
        let mut calc = Calculator::new();
        edit(&mut calc, Field::Wavelength, "1550");
        let outcome = edit(&mut calc, Field::Beta, "1e7");
        assert_eq!(outcome.changed, [Field::Beta]);
    }

    #[test]
    fn test_failed_solve_leaves_fields_and_resets_formula() {
        let mut calc = Calculator::new();
        edit(&mut calc, Field::Neff, "2.5");
        edit(&mut calc, Field::Wavelength, "1550");
        calc.handle(Event::Calculate);
        assert_eq!(calc.formula(), Some(Formula::Beta));

        // All three supplied now.
        let before = calc.fields().clone();
        let outcome = calc.handle(Event::Calculate);
        let notification = outcome.notification.expect("over-determined input");
        assert_eq!(notification.title, "Input Error");
        assert!(outcome.changed.is_empty());
        assert_eq!(calc.fields(), &before);
        assert_eq!(calc.formula_text(), FORMULA_PLACEHOLDER);
        assert_eq!(calc.history().len(), 1);
    }

    fn unsynchronized(beta: &str, neff: &str, wavelength: &str, frequency: &str) -> Calculator {
        let mut fields = FieldSet::default();
        fields.set(Field::Beta, beta);
        fields.set(Field::Neff, neff);
        fields.set(Field::Wavelength, wavelength);
        fields.set(Field::Frequency, frequency);
        Calculator::with_fields(fields)
    }

    #[test]
    fn test_wavelength_resolved_from_frequency_on_success() {
        let mut calc = unsynchronized("", "2.4", "", "193.10");
        let outcome = calc.handle(Event::Calculate);
        assert!(outcome.notification.is_none());
        assert_eq!(outcome.changed, [Field::Beta, Field::Wavelength]);
        assert_eq!(calc.text(Field::Wavelength), "1552.52");
        assert_eq!(calc.text(Field::Frequency), "193.10");
    }

    #[test]
    fn test_failed_solve_does_not_write_resolved_wavelength() {
        let mut calc = unsynchronized("1e7", "2.4", "", "193.10");
        let outcome = calc.handle(Event::Calculate);
        assert!(outcome.notification.is_some());
        assert!(outcome.changed.is_empty());
        assert_eq!(calc.text(Field::Wavelength), "");
    }

    #[test]
    fn test_clear_field_and_pair() {
        let mut calc = Calculator::new();
        edit(&mut calc, Field::Beta, "1e7");
        edit(&mut calc, Field::Wavelength, "1550");

        calc.handle(Event::ClearField(Field::Beta));
        assert_eq!(calc.text(Field::Beta), "");
        assert_eq!(calc.text(Field::Frequency), "193.41");

        let outcome = calc.handle(Event::ClearWavelengthAndFrequency);
        assert_eq!(outcome.changed, [Field::Wavelength, Field::Frequency]);
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut calc = Calculator::new();
        edit(&mut calc, Field::Neff, "2.5");
        edit(&mut calc, Field::Wavelength, "1550");
        calc.handle(Event::Calculate);
        assert_eq!(calc.history().len(), 1);

        calc.handle(Event::ClearAll);
        for field in Field::ALL {
            assert_eq!(calc.text(field), "");
        }
        assert_eq!(calc.formula_text(), FORMULA_PLACEHOLDER);
        assert!(calc.history().is_empty());
    }
}
