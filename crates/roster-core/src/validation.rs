use crate::dataset::Dataset;
use crate::employee::{Employee, first_violation};
use crate::error::ValidationError;

/// Validate decoded records against the employee rules.
///
/// Records are checked in input order and the first failure is returned;
/// later invalid records are not reported. On success the full sequence is
/// kept as-is, without dropping, reordering or deduplicating anything.
pub fn validate(records: Vec<Employee>) -> Result<Dataset, ValidationError> {
    if records.is_empty() {
        return Err(ValidationError::EmptyOrMissing);
    }

    for (index, employee) in records.iter().enumerate() {
        if let Some(field) = first_violation(employee) {
            return Err(ValidationError::InvalidField {
                index,
                field,
                value: employee.field_value(field),
                employee: employee.display_name().map(str::to_string),
            });
        }
    }

    Ok(Dataset::new(records))
}
