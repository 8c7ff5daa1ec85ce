use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use roster_core::{Dataset, Employee, validate};

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::pools::{
    AGE_SPAN, DEPARTMENTS, FIRST_NAMES, LAST_NAMES, MIN_AGE, MIN_SALARY, SALARY_SPAN,
};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating synthetic employee datasets.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        if self.options.count == 0 {
            return Err(GenerationError::InvalidOptions(
                "count must be at least 1".to_string(),
            ));
        }

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());

        info!(
            run_id = %run_id,
            rows = self.options.count,
            seed,
            "generation started"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let records: Vec<Employee> = (0..self.options.count)
            .map(|_| draw_employee(&mut rng))
            .collect();
        let dataset = validate(records)?;

        let report = GenerationReport {
            run_id: run_id.clone(),
            seed,
            rows_requested: self.options.count as u64,
            rows_generated: dataset.len() as u64,
            duration_ms: start.elapsed().as_millis() as u64,
            generated_at: chrono::Utc::now(),
        };

        info!(
            run_id = %run_id,
            rows_generated = report.rows_generated,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { dataset, report })
    }
}

/// Generate `count` records, reproducibly when `seed` is given.
pub fn generate(count: usize, seed: Option<u64>) -> Result<Dataset, GenerationError> {
    GenerationEngine::new(GenerateOptions { count, seed })
        .run()
        .map(|result| result.dataset)
}

fn draw_employee<R: Rng>(rng: &mut R) -> Employee {
    let first = pick(&FIRST_NAMES, rng);
    let last = pick(&LAST_NAMES, rng);
    let age = MIN_AGE + rng.random_range(0..AGE_SPAN);
    let department = pick(&DEPARTMENTS, rng);
    let salary = MIN_SALARY + rng.random::<f64>() * SALARY_SPAN;

    Employee::new(format!("{first} {last}"), age, department, salary)
}

fn pick<'a, R: Rng>(values: &[&'a str], rng: &mut R) -> &'a str {
    values[rng.random_range(0..values.len())]
}
