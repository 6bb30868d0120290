use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use super::fractionalfunction::{
    checked_divide,
    EvaluationError,
    FractionalFunction
};
use super::linearfractionalfunction::LinearCoefficients;

/// Coefficients of `(a2·x² + a1·x + a0) / (b2·x² + b1·x + b0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticCoefficients {
    pub a2: f64,
    pub a1: f64,
    pub a0: f64,
    pub b2: f64,
    pub b1: f64,
    pub b0: f64
}

impl QuadraticCoefficients {
    pub fn new(a2: f64, a1: f64, a0: f64, b2: f64, b1: f64, b0: f64) -> QuadraticCoefficients {
        QuadraticCoefficients { a2, a1, a0, b2, b1, b0 }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// QuadraticFractionalFunction
// ─────────────────────────────────────────────────────────────────────────────
//
// Carries the linear coefficient set plus the x² terms a2 and b2. Both the
// numerator and the denominator change shape, so none of the linear
// arithmetic is reused.

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticFractionalFunction {
    coefficients: QuadraticCoefficients
}

impl QuadraticFractionalFunction {
    pub fn new(a2: f64, a1: f64, a0: f64, b2: f64, b1: f64, b0: f64) -> QuadraticFractionalFunction {
        QuadraticFractionalFunction {
            coefficients: QuadraticCoefficients::new(a2, a1, a0, b2, b1, b0)
        }
    }

    pub fn from_coefficients(coefficients: QuadraticCoefficients) -> QuadraticFractionalFunction {
        QuadraticFractionalFunction { coefficients }
    }

    /// Extends a linear coefficient set with the x² terms.
    pub fn from_linear(linear: LinearCoefficients, a2: f64, b2: f64) -> QuadraticFractionalFunction {
        QuadraticFractionalFunction::new(a2, linear.a1, linear.a0, b2, linear.b1, linear.b0)
    }

    pub fn coefficients(&self) -> QuadraticCoefficients {
        self.coefficients
    }

    pub fn linear_part(&self) -> LinearCoefficients {
        let c = &self.coefficients;
        LinearCoefficients::new(c.a1, c.a0, c.b1, c.b0)
    }

    pub fn set_coefficients(&mut self, a2: f64, a1: f64, a0: f64, b2: f64, b1: f64, b0: f64) {
        self.coefficients = QuadraticCoefficients::new(a2, a1, a0, b2, b1, b0);
    }
}

impl FractionalFunction for QuadraticFractionalFunction {
    fn name(&self) -> &'static str {
        "quadratic fractional function"
    }

    fn degree(&self) -> u32 {
        2
    }

    fn numerator(&self, x: f64) -> f64 {
        let c = &self.coefficients;
        c.a2 * (x * x) + c.a1 * x + c.a0
    }

    fn denominator(&self, x: f64) -> f64 {
        let c = &self.coefficients;
        c.b2 * (x * x) + c.b1 * x + c.b0
    }

    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        let c = &self.coefficients;
        let x_squared = x * x;
        let numerator = c.a2 * x_squared + c.a1 * x + c.a0;
        let denominator = c.b2 * x_squared + c.b1 * x + c.b0;
        checked_divide(x, numerator, denominator)
    }

    fn describe(&self) -> String {
        let c = &self.coefficients;
        format!(
            "{}: ({}x^2 + {}x + {}) / ({}x^2 + {}x + {}) [a2={}, a1={}, a0={}, b2={}, b1={}, b0={}]",
            self.name(),
            c.a2, c.a1, c.a0, c.b2, c.b1, c.b0,
            c.a2, c.a1, c.a0, c.b2, c.b1, c.b0
        )
    }
}

impl fmt::Display for QuadraticFractionalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
