use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use super::fractionalfunction::FractionalFunction;

/// Coefficients of `(a1·x + a0) / (b1·x + b0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCoefficients {
    pub a1: f64,
    pub a0: f64,
    pub b1: f64,
    pub b0: f64
}

impl LinearCoefficients {
    pub fn new(a1: f64, a0: f64, b1: f64, b0: f64) -> LinearCoefficients {
        LinearCoefficients { a1, a0, b1, b0 }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LinearFractionalFunction
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFractionalFunction {
    coefficients: LinearCoefficients
}

impl LinearFractionalFunction {
    pub fn new(a1: f64, a0: f64, b1: f64, b0: f64) -> LinearFractionalFunction {
        LinearFractionalFunction { coefficients: LinearCoefficients::new(a1, a0, b1, b0) }
    }

    pub fn from_coefficients(coefficients: LinearCoefficients) -> LinearFractionalFunction {
        LinearFractionalFunction { coefficients }
    }

    pub fn coefficients(&self) -> LinearCoefficients {
        self.coefficients
    }

    pub fn set_coefficients(&mut self, a1: f64, a0: f64, b1: f64, b0: f64) {
        self.coefficients = LinearCoefficients::new(a1, a0, b1, b0);
    }
}

impl FractionalFunction for LinearFractionalFunction {
    fn name(&self) -> &'static str {
        "linear fractional function"
    }

    fn degree(&self) -> u32 {
        1
    }

    fn numerator(&self, x: f64) -> f64 {
        self.coefficients.a1 * x + self.coefficients.a0
    }

    fn denominator(&self, x: f64) -> f64 {
        self.coefficients.b1 * x + self.coefficients.b0
    }

    fn describe(&self) -> String {
        let c = &self.coefficients;
        format!(
            "{}: ({}x + {}) / ({}x + {}) [a1={}, a0={}, b1={}, b0={}]",
            self.name(), c.a1, c.a0, c.b1, c.b0, c.a1, c.a0, c.b1, c.b0
        )
    }
}

impl fmt::Display for LinearFractionalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
