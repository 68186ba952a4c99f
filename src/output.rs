use clap::ValueEnum;
use serde::Serialize;

use crate::task::{ValidationReport, problem::ProblemRecord};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable report on stderr.
    #[default]
    Text,
    /// One JSON document on stdout.
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    tasks: usize,
    problems: Vec<ProblemRecord<'a>>,
}

/// Renders the outcome of a validation pass in `format`.
pub fn render(
    format: ReportFormat,
    task_count: usize,
    outcome: &Result<(), ValidationReport>,
) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(match outcome {
            Ok(()) => format!("taskfile ok: {} tasks", task_count),
            Err(report) => report.to_string(),
        }),
        ReportFormat::Json => {
            let problems = match outcome {
                Ok(()) => Vec::new(),
                Err(report) => report.problems().iter().map(ProblemRecord::from).collect(),
            };
            serde_json::to_string(&JsonReport {
                valid: outcome.is_ok(),
                tasks: task_count,
                problems,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Problem;

    #[test]
    fn text_success_counts_tasks() {
        assert_eq!(
            render(ReportFormat::Text, 3, &Ok(())).unwrap(),
            "taskfile ok: 3 tasks"
        );
    }

    #[test]
    fn json_failure_lists_problems() {
        let report = ValidationReport::new(vec![Problem::ReservedId {
            task: "run".to_string(),
        }]);
        let rendered = render(ReportFormat::Json, 1, &Err(report)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["valid"], false);
        assert_eq!(value["tasks"], 1);
        assert_eq!(value["problems"][0]["kind"], "reserved_id");
        assert_eq!(value["problems"][0]["task"], "run");
        assert_eq!(
            value["problems"][0]["message"],
            "'run' is reserved and cannot be used as a task ID."
        );
    }
}
