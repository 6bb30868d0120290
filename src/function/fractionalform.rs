use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use super::fractionalfunction::{
    EvaluationError,
    FractionalFunction
};
use super::linearfractionalfunction::LinearFractionalFunction;
use super::quadraticfractionalfunction::QuadraticFractionalFunction;

/// Either rational function variant held by value, so mixed collections
/// need no boxing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum FractionalForm {
    Linear(LinearFractionalFunction),
    Quadratic(QuadraticFractionalFunction)
}

impl FractionalForm {
    pub fn linear(a1: f64, a0: f64, b1: f64, b0: f64) -> FractionalForm {
        FractionalForm::Linear(LinearFractionalFunction::new(a1, a0, b1, b0))
    }

    pub fn quadratic(a2: f64, a1: f64, a0: f64, b2: f64, b1: f64, b0: f64) -> FractionalForm {
        FractionalForm::Quadratic(QuadraticFractionalFunction::new(a2, a1, a0, b2, b1, b0))
    }

    pub fn as_function(&self) -> &dyn FractionalFunction {
        match self {
            FractionalForm::Linear(function) => function,
            FractionalForm::Quadratic(function) => function
        }
    }
}

impl FractionalFunction for FractionalForm {
    fn name(&self) -> &'static str {
        self.as_function().name()
    }

    fn degree(&self) -> u32 {
        self.as_function().degree()
    }

    fn numerator(&self, x: f64) -> f64 {
        self.as_function().numerator(x)
    }

    fn denominator(&self, x: f64) -> f64 {
        self.as_function().denominator(x)
    }

    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        match self {
            FractionalForm::Linear(function) => function.evaluate(x),
            FractionalForm::Quadratic(function) => function.evaluate(x)
        }
    }

    fn describe(&self) -> String {
        self.as_function().describe()
    }
}

impl From<LinearFractionalFunction> for FractionalForm {
    fn from(function: LinearFractionalFunction) -> Self {
        FractionalForm::Linear(function)
    }
}

impl From<QuadraticFractionalFunction> for FractionalForm {
    fn from(function: QuadraticFractionalFunction) -> Self {
        FractionalForm::Quadratic(function)
    }
}

impl fmt::Display for FractionalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
