use std::ops::Deref;

use serde::Serialize;

use crate::employee::Employee;

/// An accepted, non-empty sequence of employee records.
///
/// Only [`crate::validate`] constructs a `Dataset`, so every element satisfies
/// [`crate::is_valid`]. Records are exposed read-only, in their original order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Employee>,
}

impl Dataset {
    pub(crate) fn new(records: Vec<Employee>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// Give back the raw record sequence.
    pub fn into_records(self) -> Vec<Employee> {
        self.records
    }
}

impl Deref for Dataset {
    type Target = [Employee];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl AsRef<[Employee]> for Dataset {
    fn as_ref(&self) -> &[Employee] {
        &self.records
    }
}
