use thiserror::Error;

/// Smallest denominator magnitude accepted by `evaluate`.
pub const TOLERANCE: f64 = 1e-9;

// ─────────────────────────────────────────────────────────────────────────────
// EvaluationError
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluationError {
    #[error("division by near-zero denominator {denominator} at x = {x}")]
    DivisionByNearZero { x: f64, denominator: f64 },
}

// ─────────────────────────────────────────────────────────────────────────────
// FractionalFunction
// ─────────────────────────────────────────────────────────────────────────────

/// Shared capability of every rational function variant.
///
/// Implementors provide the raw numerator and denominator polynomials; the
/// default `evaluate` divides them through `checked_divide`.
pub trait FractionalFunction: Send + Sync {
    fn name(&self) -> &'static str;

    fn degree(&self) -> u32;

    fn numerator(&self, x: f64) -> f64;

    fn denominator(&self, x: f64) -> f64;

    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        checked_divide(x, self.numerator(x), self.denominator(x))
    }

    fn describe(&self) -> String;
}

/// Divides `numerator` by `denominator` unless the denominator lies inside
/// the `TOLERANCE` band around zero.
pub fn checked_divide(x: f64, numerator: f64, denominator: f64) -> Result<f64, EvaluationError> {
    if denominator.abs() < TOLERANCE {
        Err(EvaluationError::DivisionByNearZero { x, denominator })
    } else {
        Ok(numerator / denominator)
    }
}
