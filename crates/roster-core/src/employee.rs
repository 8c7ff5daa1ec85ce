use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inclusive upper bound for a plausible employee age.
pub const MAX_AGE: i32 = 120;

/// A single employee record as it appears in the interchange file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Employee {
    pub name: String,
    pub age: i32,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            department: department.into(),
            salary,
        }
    }

    /// Name with surrounding whitespace removed, or `None` when blank.
    pub fn display_name(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Render the value of a single field for diagnostics.
    pub fn field_value(&self, field: EmployeeField) -> String {
        match field {
            EmployeeField::Name => format!("{:?}", self.name),
            EmployeeField::Age => self.age.to_string(),
            EmployeeField::Salary => self.salary.to_string(),
        }
    }
}

/// Fields covered by the validity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeField {
    Name,
    Age,
    Salary,
}

impl EmployeeField {
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::Age => "age",
            EmployeeField::Salary => "salary",
        }
    }

    /// The rule a record must satisfy for this field.
    pub fn rule(self) -> &'static str {
        match self {
            EmployeeField::Name => "name must not be blank",
            EmployeeField::Age => "age must be within 1..=120",
            EmployeeField::Salary => "salary must be a finite number >= 0",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the first rule violated by `employee`, checking name, age, then salary.
pub fn first_violation(employee: &Employee) -> Option<EmployeeField> {
    if employee.display_name().is_none() {
        return Some(EmployeeField::Name);
    }
    if employee.age <= 0 || employee.age > MAX_AGE {
        return Some(EmployeeField::Age);
    }
    // JSON has no spelling for NaN or infinity, so neither can be stored.
    if !(employee.salary.is_finite() && employee.salary >= 0.0) {
        return Some(EmployeeField::Salary);
    }
    None
}

/// Returns true when the record satisfies every validity rule.
pub fn is_valid(employee: &Employee) -> bool {
    first_violation(employee).is_none()
}
