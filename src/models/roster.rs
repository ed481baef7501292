//! Roster model.
//!
//! A [`Roster`] maps each detected employee name to the shifts found for them
//! in one sheet. The mapping itself makes no ordering promise; consumers that
//! need chronological order use [`Roster::sorted`].

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::Shift;

/// Employee name to shifts for one sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: HashMap<String, Vec<Shift>>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the shifts for an employee, returning any shifts previously
    /// stored under the same name.
    pub fn insert(&mut self, name: impl Into<String>, shifts: Vec<Shift>) -> Option<Vec<Shift>> {
        self.entries.insert(name.into(), shifts)
    }

    /// Returns the shifts for an employee, if the employee was detected.
    pub fn get(&self, name: &str) -> Option<&[Shift]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Returns true if the employee was detected, even without any shifts.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of employees in the roster.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no employees were detected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, shifts)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Shift])> {
        self.entries
            .iter()
            .map(|(name, shifts)| (name.as_str(), shifts.as_slice()))
    }

    /// Returns a copy ordered by employee name with each shift list sorted by
    /// date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use shift_roster::models::{Roster, Shift};
    ///
    /// let mut roster = Roster::new();
    /// roster.insert(
    ///     "Jane Doe",
    ///     vec![
    ///         Shift { date: NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(), label: "N".into() },
    ///         Shift { date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(), label: "M".into() },
    ///     ],
    /// );
    ///
    /// let sorted = roster.sorted();
    /// assert_eq!(sorted["Jane Doe"][0].label, "M");
    /// ```
    pub fn sorted(&self) -> BTreeMap<String, Vec<Shift>> {
        self.entries
            .iter()
            .map(|(name, shifts)| {
                let mut shifts = shifts.clone();
                shifts.sort_by_key(|shift| shift.date);
                (name.clone(), shifts)
            })
            .collect()
    }

    /// Consumes the roster and returns the underlying mapping.
    pub fn into_inner(self) -> HashMap<String, Vec<Shift>> {
        self.entries
    }
}

impl From<HashMap<String, Vec<Shift>>> for Roster {
    fn from(entries: HashMap<String, Vec<Shift>>) -> Self {
        Self { entries }
    }
}
