use std::collections::BTreeMap;

use roster_core::Employee;
use serde::Serialize;

/// Statistics derived from one dataset. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationReport {
    pub count: usize,
    /// `"<name> - <department>"` for the first record.
    pub sample: String,
    pub by_department: BTreeMap<String, DepartmentStats>,
    pub salary: SalaryStats,
    pub older_than: AgeCohort,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_earner: Option<TopEarner>,
}

/// Members of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStats {
    pub count: usize,
    pub average_salary: f64,
}

/// Summary of all salaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub average: f64,
}

/// Employees strictly older than `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeCohort {
    pub threshold: i32,
    pub count: usize,
}

/// Highest-paid member of a department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopEarner {
    pub department: String,
    pub index: usize,
    pub employee: Employee,
}
