//! Core types shared across the calculator.
//!
//! Every quantity on the form is held as the text the user (or the engine)
//! wrote into it, paired with the value parsed from that text. Empty text
//! means the quantity is unset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four quantities on the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Propagation constant β (rad/m).
    Beta,
    /// Effective refractive index n_eff (dimensionless).
    Neff,
    /// Free-space wavelength λ (nm).
    Wavelength,
    /// Optical frequency f (THz).
    Frequency,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Beta, Field::Neff, Field::Wavelength, Field::Frequency];

    /// Short symbol used in formulas and history lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Field::Beta => "β",
            Field::Neff => "n_eff",
            Field::Wavelength => "λ",
            Field::Frequency => "f",
        }
    }

    /// Plain-language name of the quantity.
    pub fn name(self) -> &'static str {
        match self {
            Field::Beta => "propagation constant",
            Field::Neff => "effective refractive index",
            Field::Wavelength => "wavelength",
            Field::Frequency => "frequency",
        }
    }

    /// Display unit, empty for the dimensionless index.
    pub fn unit(self) -> &'static str {
        match self {
            Field::Beta => "rad/m",
            Field::Neff => "",
            Field::Wavelength => "nm",
            Field::Frequency => "THz",
        }
    }

    /// Number of decimals the field is displayed with.
    ///
    /// This is display precision only; all arithmetic uses full `f64`.
    pub fn decimals(self) -> usize {
        match self {
            Field::Neff => 6,
            Field::Beta | Field::Wavelength | Field::Frequency => 2,
        }
    }

    /// Form label, e.g. `Propagation constant (β) [rad/m]`.
    pub fn label(self) -> String {
        let mut name = self.name().to_owned();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        match self.unit() {
            "" => format!("{} ({})", name, self.symbol()),
            unit => format!("{} ({}) [{}]", name, self.symbol(), unit),
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Beta => 0,
            Field::Neff => 1,
            Field::Wavelength => 2,
            Field::Frequency => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parsed state of a field's raw text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotValue {
    /// Empty (or whitespace-only) text.
    Unset,
    /// Text that parses as a floating-point number.
    Value(f64),
    /// Non-empty text that is not a number.
    Malformed,
}

impl SlotValue {
    /// Classify a piece of field text.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::Value(value),
            Err(_) => Self::Malformed,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Malformed => None,
        }
    }

    pub fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// A quantity slot: raw text plus the value parsed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    text: String,
    value: SlotValue,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            text: String::new(),
            value: SlotValue::Unset,
        }
    }
}

impl Slot {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = SlotValue::parse(&text);
        Self { text, value }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> SlotValue {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_unset()
    }
}

/// The four slots of the calculator form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    slots: [Slot; 4],
}

impl FieldSet {
    pub fn slot(&self, field: Field) -> &Slot {
        &self.slots[field.index()]
    }

    pub fn text(&self, field: Field) -> &str {
        self.slot(field).text()
    }

    /// Replace a slot's text. Returns `true` if the text changed.
    ///
    /// This is a raw store; it does not run wavelength/frequency
    /// synchronization. Use [`crate::units::FieldHost::write_field`] for
    /// writes that should.
    pub fn set(&mut self, field: Field, text: impl Into<String>) -> bool {
        let slot = Slot::new(text);
        let changed = self.slots[field.index()].text != slot.text;
        self.slots[field.index()] = slot;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_value_classification() {
        assert_eq!(SlotValue::parse(""), SlotValue::Unset);
        assert_eq!(SlotValue::parse("   "), SlotValue::Unset);
        assert_eq!(SlotValue::parse("2.5"), SlotValue::Value(2.5));
        assert_eq!(SlotValue::parse(" 1550 "), SlotValue::Value(1550.0));
        assert_eq!(SlotValue::parse("1e-6"), SlotValue::Value(1e-6));
        assert_eq!(SlotValue::parse("abc"), SlotValue::Malformed);
        assert_eq!(SlotValue::parse("1,5"), SlotValue::Malformed);
    }

    #[test]
    fn test_field_set_reports_changes() {
        let mut fields = FieldSet::default();
        assert!(fields.set(Field::Neff, "2.4"));
        assert!(!fields.set(Field::Neff, "2.4"));
        assert_eq!(fields.slot(Field::Neff).value(), SlotValue::Value(2.4));
        assert!(fields.slot(Field::Beta).is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::Beta.label(), "Propagation constant (β) [rad/m]");
        assert_eq!(Field::Neff.label(), "Effective refractive index (n_eff)");
        assert_eq!(Field::Frequency.label(), "Frequency (f) [THz]");
    }
}
