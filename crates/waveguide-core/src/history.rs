//! Append-only history of successful solves.

use serde::{Deserialize, Serialize};

use crate::types::{Field, FieldSet};

/// Snapshot of the four fields after a successful solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    pub beta: String,
    pub neff: String,
    pub wavelength: String,
    pub frequency: String,
}

impl HistoryRecord {
    pub fn from_fields(fields: &FieldSet) -> Self {
        Self {
            beta: fields.text(Field::Beta).to_owned(),
            neff: fields.text(Field::Neff).to_owned(),
            wavelength: fields.text(Field::Wavelength).to_owned(),
            frequency: fields.text(Field::Frequency).to_owned(),
        }
    }

    /// Fixed-width single-line rendering for monospace history views.
    pub fn to_line(&self) -> String {
        format!(
            "β: {:<15}n_eff: {:<9}λ: {:<8}f: {:<8}",
            self.beta, self.neff, self.wavelength, self.frequency
        )
    }
}

/// Order in which history entries are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// In-memory log of solves, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record. Only a full reset does this.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    /// Iterate over the records in the requested presentation order.
    pub fn entries(&self, order: HistoryOrder) -> Box<dyn Iterator<Item = &HistoryRecord> + '_> {
        match order {
            HistoryOrder::OldestFirst => Box::new(self.records.iter()),
            HistoryOrder::NewestFirst => Box::new(self.records.iter().rev()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(beta: &str) -> HistoryRecord {
        HistoryRecord {
            beta: beta.into(),
            neff: "2.500000".into(),
            wavelength: "1550".into(),
            frequency: "193.41".into(),
        }
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let mut history = History::default();
        for beta in ["1", "2", "2", "3"] {
            history.push(record(beta));
        }

        let oldest: Vec<_> = history
            .entries(HistoryOrder::OldestFirst)
            .map(|r| r.beta.as_str())
            .collect();
        let newest: Vec<_> = history
            .entries(HistoryOrder::NewestFirst)
            .map(|r| r.beta.as_str())
            .collect();
        assert_eq!(oldest, ["1", "2", "2", "3"]);
        assert_eq!(newest, ["3", "2", "2", "1"]);
        assert_eq!(history.latest().map(|r| r.beta.as_str()), Some("3"));
    }

    #[test]
    fn test_line_is_fixed_width() {
        let line = record("10134170.35").to_line();
        assert_eq!(line, "β: 10134170.35    n_eff: 2.500000 λ: 1550    f: 193.41  ");
    }
}
