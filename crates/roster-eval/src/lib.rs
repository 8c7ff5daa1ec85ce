//! Summary statistics over accepted employee datasets.

pub mod engine;
pub mod errors;
pub mod metrics;
pub mod model;
pub mod report;
pub mod summation;

pub use engine::{AggregationEngine, aggregate};
pub use errors::EvalError;
pub use metrics::{AgeCohort, AggregationReport, DepartmentStats, SalaryStats, TopEarner};
pub use model::AggregateOptions;
pub use report::render_report;
pub use summation::CompensatedSum;
