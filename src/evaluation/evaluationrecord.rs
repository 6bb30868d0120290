use serde::Serialize;

use crate::function::fractionalfunction::EvaluationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Value(f64),
    Failed(String)
}

impl From<Result<f64, EvaluationError>> for EvaluationOutcome {
    fn from(result: Result<f64, EvaluationError>) -> Self {
        match result {
            Ok(value) => EvaluationOutcome::Value(value),
            Err(error) => EvaluationOutcome::Failed(error.to_string())
        }
    }
}

/// Result of evaluating one function at one point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    name: String,
    description: String,
    x: f64,
    outcome: EvaluationOutcome
}

impl EvaluationRecord {
    pub fn new(name: String, description: String, x: f64, outcome: EvaluationOutcome) -> EvaluationRecord {
        EvaluationRecord { name, description, x, outcome }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn outcome(&self) -> &EvaluationOutcome {
        &self.outcome
    }

    pub fn value(&self) -> Option<f64> {
        match self.outcome {
            EvaluationOutcome::Value(value) => Some(value),
            EvaluationOutcome::Failed(_) => None
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, EvaluationOutcome::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationSummary {
    succeeded: usize,
    failed: usize
}

impl EvaluationSummary {
    pub fn from_records(records: &[EvaluationRecord]) -> EvaluationSummary {
        let failed = records.iter().filter(|record| record.is_failure()).count();
        EvaluationSummary { succeeded: records.len() - failed, failed }
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }
}
