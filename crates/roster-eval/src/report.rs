use crate::metrics::AggregationReport;

/// Render a deterministic plain-text summary of an aggregation report.
pub fn render_report(report: &AggregationReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Dataset loaded with {} employees", report.count));
    lines.push(format!("Sample: {}", report.sample));
    lines.push(String::new());

    lines.push("Salary".to_string());
    lines.push(format!("- average: ${:.2}", report.salary.average));
    lines.push(format!("- min: ${:.2}", report.salary.min));
    lines.push(format!("- max: ${:.2}", report.salary.max));
    lines.push(format!(
        "Employees above {}: {}",
        report.older_than.threshold, report.older_than.count
    ));

    match &report.top_earner {
        Some(top) => lines.push(format!(
            "Highest paid in {}: {} - ${:.2}",
            top.department, top.employee.name, top.employee.salary
        )),
        None => lines.push("Highest paid: no matching department members".to_string()),
    }
    lines.push(String::new());

    lines.push("Employees by department".to_string());
    for (department, stats) in &report.by_department {
        lines.push(format!("- {department}: {} employees", stats.count));
    }
    lines.push(String::new());

    lines.push("Average salary by department".to_string());
    for (department, stats) in &report.by_department {
        lines.push(format!("- {department}: ${:.2}", stats.average_salary));
    }

    lines.join("\n")
}
