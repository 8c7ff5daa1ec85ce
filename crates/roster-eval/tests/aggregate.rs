use roster_core::{Dataset, Employee, validate};
use roster_eval::{
    AggregateOptions, AggregationEngine, CompensatedSum, EvalError, aggregate, render_report,
};

fn three_employees() -> Dataset {
    validate(vec![
        Employee::new("Alice", 25, "Engineering", 80000.0),
        Employee::new("Bob", 40, "Engineering", 95000.0),
        Employee::new("Cara", 35, "HR", 60000.0),
    ])
    .expect("valid dataset")
}

#[test]
fn computes_reference_example() {
    let report = aggregate(&three_employees()).expect("aggregate");

    assert_eq!(report.count, 3);
    assert_eq!(report.by_department.len(), 2);
    assert_eq!(report.by_department["Engineering"].count, 2);
    assert_eq!(report.by_department["HR"].count, 1);
    assert!((report.salary.average - 78333.333_333).abs() < 1e-3);
    assert_eq!(report.salary.min, 60000.0);
    assert_eq!(report.salary.max, 95000.0);
    assert_eq!(report.salary.count, 3);
    assert_eq!(report.older_than.threshold, 30);
    assert_eq!(report.older_than.count, 2);

    let top = report.top_earner.expect("engineering has members");
    assert_eq!(top.employee.name, "Bob");
    assert_eq!(top.index, 1);

    assert_eq!(report.by_department["Engineering"].average_salary, 87500.0);
    assert_eq!(report.by_department["HR"].average_salary, 60000.0);
    assert_eq!(report.sample, "Alice - Engineering");
}

#[test]
fn empty_input_fails() {
    assert_eq!(aggregate(&[]), Err(EvalError::EmptyDataset));
}

#[test]
fn repeated_aggregation_is_identical() {
    let dataset = roster_generate::generate(2_000, Some(11)).expect("generate");

    let a = aggregate(&dataset).expect("first");
    let b = aggregate(&dataset).expect("second");

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).expect("json a"),
        serde_json::to_string(&b).expect("json b")
    );
}

#[test]
fn fused_pass_matches_independent_passes() {
    let dataset = roster_generate::generate(5_000, Some(5)).expect("generate");
    let report = aggregate(&dataset).expect("aggregate");

    let sum = dataset
        .iter()
        .map(|e| e.salary)
        .collect::<CompensatedSum>()
        .value();
    let min = dataset.iter().map(|e| e.salary).fold(f64::INFINITY, f64::min);
    let max = dataset
        .iter()
        .map(|e| e.salary)
        .fold(f64::NEG_INFINITY, f64::max);
    let older = dataset.iter().filter(|e| e.age > 30).count();

    assert_eq!(report.salary.sum, sum);
    assert_eq!(report.salary.average, sum / dataset.len() as f64);
    assert_eq!(report.salary.min, min);
    assert_eq!(report.salary.max, max);
    assert_eq!(report.older_than.count, older);

    let bucket_total: usize = report.by_department.values().map(|d| d.count).sum();
    assert_eq!(bucket_total, dataset.len());

    for (department, stats) in &report.by_department {
        let salaries: Vec<f64> = dataset
            .iter()
            .filter(|e| &e.department == department)
            .map(|e| e.salary)
            .collect();
        let mean =
            salaries.iter().copied().collect::<CompensatedSum>().value() / salaries.len() as f64;
        assert_eq!(stats.count, salaries.len());
        assert_eq!(stats.average_salary, mean);
    }

    let expected_top = dataset
        .iter()
        .filter(|e| e.department == "Engineering")
        .fold(None::<&Employee>, |best, e| match best {
            Some(b) if b.salary >= e.salary => Some(b),
            _ => Some(e),
        });
    assert_eq!(
        report.top_earner.map(|t| t.employee),
        expected_top.cloned()
    );
}

#[test]
fn large_totals_do_not_drift() {
    let salaries = [30_000.1, 45_000.7, 99_999.99];
    let records: Vec<Employee> = (0..3_000)
        .map(|i| Employee::new(format!("E{i}"), 40, "Sales", salaries[i % 3]))
        .collect();

    let report = aggregate(&records).expect("aggregate");

    let naive = records.iter().map(|e| e.salary).sum::<f64>() / records.len() as f64;
    assert_ne!(report.salary.average, naive);
    assert_eq!(report.salary.average, 58_333.596_666_666_665);
    assert_eq!(
        report.by_department["Sales"].average_salary,
        report.salary.average
    );
}

#[test]
fn only_present_departments_are_keyed() {
    let dataset = validate(vec![Employee::new("Gary", 50, "Legal", 1.0)]).expect("valid");
    let report = aggregate(&dataset).expect("aggregate");

    assert_eq!(report.by_department.keys().collect::<Vec<_>>(), vec!["Legal"]);
    assert!(report.top_earner.is_none());
}

#[test]
fn ties_keep_first_occurrence() {
    let dataset = validate(vec![
        Employee::new("First", 40, "Engineering", 100.0),
        Employee::new("Second", 41, "Engineering", 100.0),
    ])
    .expect("valid");

    let top = aggregate(&dataset)
        .expect("aggregate")
        .top_earner
        .expect("engineering present");
    assert_eq!(top.employee.name, "First");
    assert_eq!(top.index, 0);
}

#[test]
fn threshold_is_strict_and_configurable() {
    let dataset = validate(vec![
        Employee::new("A", 30, "HR", 1.0),
        Employee::new("B", 31, "HR", 2.0),
        Employee::new("C", 45, "Sales", 3.0),
    ])
    .expect("valid");

    let engine = AggregationEngine::new(AggregateOptions {
        age_threshold: 40,
        top_earner_department: "Sales".to_string(),
    });
    let report = engine.run(&dataset).expect("aggregate");

    assert_eq!(aggregate(&dataset).expect("default").older_than.count, 2);
    assert_eq!(report.older_than.count, 1);
    assert_eq!(report.top_earner.map(|t| t.employee.name), Some("C".to_string()));
}

#[test]
fn rendered_report_lists_departments() {
    let report = aggregate(&three_employees()).expect("aggregate");
    let text = render_report(&report);

    assert!(text.contains("Dataset loaded with 3 employees"), "{text}");
    assert!(text.contains("- average: $78333.33"), "{text}");
    assert!(text.contains("Employees above 30: 2"), "{text}");
    assert!(text.contains("Highest paid in Engineering: Bob - $95000.00"), "{text}");
    assert!(text.contains("- Engineering: 2 employees"), "{text}");
    assert!(text.contains("- HR: $60000.00"), "{text}");
}
