use log::warn;

use crate::function::fractionalfunction::FractionalFunction;
use crate::manager::manager::FunctionManager;

use super::evaluationrecord::{
    EvaluationOutcome,
    EvaluationRecord
};

/// Evaluates every function at `x`. A failing function is recorded and the
/// remaining ones are still evaluated.
pub fn evaluate_all<'a, I, F>(functions: I, x: f64) -> Vec<EvaluationRecord> where
    I: IntoIterator<Item = (&'a str, &'a F)>,
    F: FractionalFunction + 'a {
    functions
        .into_iter()
        .map(|(name, function)| {
            let result = function.evaluate(x);
            if let Err(error) = &result {
                warn!("{} failed: {}", name, error);
            }
            EvaluationRecord::new(
                name.to_owned(),
                function.describe(),
                x,
                EvaluationOutcome::from(result)
            )
        })
        .collect()
}

/// Evaluates every registered function at each point, in registration order.
pub fn evaluate_manager(manager: &FunctionManager, points: &[f64]) -> Vec<EvaluationRecord> {
    let functions = manager.functions();
    points
        .iter()
        .flat_map(|&x| {
            evaluate_all(functions.iter().map(|(name, function)| (name.as_str(), function)), x)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::evaluationrecord::EvaluationSummary;
    use crate::function::fractionalform::FractionalForm;
    use crate::manager::manager::IManager;

    #[test]
    fn test_failure_does_not_abort_batch() {
        let failing = FractionalForm::linear(2.0, 5.0, 1.0, -2.0);
        let healthy = FractionalForm::quadratic(1.0, 2.0, 3.0, 1.0, 0.0, 1.0);
        let functions = vec![("failing", &failing), ("healthy", &healthy)];
        let records = evaluate_all(functions, 2.0);

        assert_eq!(records.len(), 2);
        assert!(records[0].is_failure());
        assert_eq!(records[0].value(), None);
        assert_eq!(records[1].value(), Some(11.0 / 5.0));
        assert_eq!(records[1].name(), "healthy");

        let summary = EvaluationSummary::from_records(&records);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.failed(), 1);
    }

    #[test]
    fn test_evaluate_manager_over_points() {
        let manager = FunctionManager::new();
        manager.insert("linear", FractionalForm::linear(2.0, 5.0, 1.0, -2.0));
        manager.insert("quadratic", FractionalForm::quadratic(1.0, 2.0, 1.0, 1.0, 0.0, -4.0));
        let records = evaluate_manager(&manager, &[1.0, 2.0]);

        let values: Vec<_> = records.iter().map(|record| record.value()).collect();
        assert_eq!(values, vec![Some(-7.0), Some(4.0 / -3.0), None, None]);
        assert_eq!(records[2].x(), 2.0);
    }

    #[test]
    fn test_record_serializes() {
        let function = FractionalForm::linear(2.0, 5.0, 1.0, -2.0);
        let records = evaluate_all(vec![("linear", &function)], 2.0);
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["outcome"]["status"], "failed");
        assert_eq!(json["name"], "linear");
    }
}
