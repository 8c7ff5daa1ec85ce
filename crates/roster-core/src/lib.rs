//! Core contracts and helpers for Roster.
//!
//! This crate defines the employee record, the JSON interchange codec, the
//! dataset validator and the on-disk dataset store shared by the generator,
//! the aggregator and the CLI.

pub mod codec;
pub mod dataset;
pub mod employee;
pub mod error;
pub mod store;
pub mod validation;

pub use codec::{dataset_json_schema, decode, decode_str, encode};
pub use dataset::Dataset;
pub use employee::{Employee, EmployeeField, first_violation, is_valid};
pub use error::{DecodeError, Error, PersistError, Result, ValidationError};
pub use store::{DatasetStore, PersistReceipt, write_bytes_atomic};
pub use validation::validate;
