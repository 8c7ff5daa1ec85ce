//! JSON interchange format for employee datasets.
//!
//! The file is a pretty-printed array of objects carrying exactly the fields
//! `name`, `age`, `department` and `salary`, in that order.

use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::employee::Employee;
use crate::error::DecodeError;

/// Encode records as pretty-printed JSON with a stable field order.
pub fn encode(records: &[Employee]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Decode an uploaded buffer. A `null` document yields an empty sequence.
pub fn decode(bytes: &[u8]) -> Result<Vec<Employee>, DecodeError> {
    let records: Option<Vec<Employee>> = serde_json::from_slice(bytes)?;
    Ok(records.unwrap_or_default())
}

/// Decode interchange text. See [`decode`].
pub fn decode_str(text: &str) -> Result<Vec<Employee>, DecodeError> {
    decode(text.as_bytes())
}

/// JSON Schema describing the interchange file.
pub fn dataset_json_schema() -> RootSchema {
    schema_for!(Vec<Employee>)
}
