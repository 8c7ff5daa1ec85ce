use std::collections::BTreeMap;
use std::time::Instant;

use roster_core::Employee;
use tracing::info;

use crate::errors::EvalError;
use crate::metrics::{AgeCohort, AggregationReport, DepartmentStats, SalaryStats, TopEarner};
use crate::model::AggregateOptions;
use crate::summation::CompensatedSum;

/// Compute summary statistics over employee datasets.
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    options: AggregateOptions,
}

impl AggregationEngine {
    pub fn new(options: AggregateOptions) -> Self {
        Self { options }
    }

    /// Aggregate `records` in a single traversal.
    ///
    /// Accepts a [`roster_core::Dataset`] through deref. Salary totals use
    /// compensated summation in input order, so the result matches computing
    /// each statistic with its own pass.
    pub fn run(&self, records: &[Employee]) -> Result<AggregationReport, EvalError> {
        let first = records.first().ok_or(EvalError::EmptyDataset)?;
        let start = Instant::now();

        let mut departments: BTreeMap<&str, DepartmentAccumulator> = BTreeMap::new();
        let mut min = first.salary;
        let mut max = first.salary;
        let mut sum = CompensatedSum::default();
        let mut older = 0usize;
        let mut top: Option<(usize, &Employee)> = None;

        for (index, employee) in records.iter().enumerate() {
            let salary = employee.salary;
            min = min.min(salary);
            max = max.max(salary);
            sum.add(salary);

            departments
                .entry(employee.department.as_str())
                .or_default()
                .push(salary);

            if employee.age > self.options.age_threshold {
                older += 1;
            }

            if employee.department == self.options.top_earner_department {
                // Strict comparison keeps the first of equal salaries.
                let replace = top.is_none_or(|(_, current)| salary > current.salary);
                if replace {
                    top = Some((index, employee));
                }
            }
        }

        let count = records.len();
        let sum = sum.value();
        let by_department = departments
            .into_iter()
            .map(|(name, acc)| (name.to_string(), acc.finish()))
            .collect();

        let report = AggregationReport {
            count,
            sample: format!("{} - {}", first.name, first.department),
            by_department,
            salary: SalaryStats {
                count,
                min,
                max,
                sum,
                average: sum / count as f64,
            },
            older_than: AgeCohort {
                threshold: self.options.age_threshold,
                count: older,
            },
            top_earner: top.map(|(index, employee)| TopEarner {
                department: self.options.top_earner_department.clone(),
                index,
                employee: employee.clone(),
            }),
        };

        info!(
            event = "aggregation_finished",
            records = count,
            departments = report.by_department.len(),
            duration_ms = start.elapsed().as_millis() as u64
        );

        Ok(report)
    }
}

/// Aggregate with default options.
pub fn aggregate(records: &[Employee]) -> Result<AggregationReport, EvalError> {
    AggregationEngine::default().run(records)
}

#[derive(Debug, Default)]
struct DepartmentAccumulator {
    count: usize,
    salary_sum: CompensatedSum,
}

impl DepartmentAccumulator {
    fn push(&mut self, salary: f64) {
        self.count += 1;
        self.salary_sum.add(salary);
    }

    fn finish(self) -> DepartmentStats {
        DepartmentStats {
            count: self.count,
            average_salary: self.salary_sum.value() / self.count as f64,
        }
    }
}
