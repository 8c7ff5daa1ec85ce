use std::path::PathBuf;

use thiserror::Error;

use crate::employee::EmployeeField;

/// The interchange text could not be parsed into employee records.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A decoded sequence was rejected by the business rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The input held no records at all.
    #[error("invalid JSON structure or empty dataset")]
    EmptyOrMissing,
    /// The first record that broke a rule, in input order.
    #[error("{}", describe_invalid_field(.index, .field, .value, .employee))]
    InvalidField {
        index: usize,
        field: EmployeeField,
        value: String,
        employee: Option<String>,
    },
}

fn describe_invalid_field(
    index: &usize,
    field: &EmployeeField,
    value: &str,
    employee: &Option<String>,
) -> String {
    let who = match employee {
        Some(name) => format!("employee at index {index} ({name})"),
        None => format!("employee at index {index}"),
    };
    format!("{who} has invalid {field}: {value} ({})", field.rule())
}

/// Writing the accepted dataset to its fixed location failed.
#[derive(Debug, Error)]
#[error("failed to persist dataset to {}: {source}", .path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Umbrella error for callers that chain core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Convenience alias for results returned by Roster crates.
pub type Result<T> = std::result::Result<T, Error>;
