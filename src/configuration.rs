use serde::Serialize;

use crate::function::fractionalform::FractionalForm;
use crate::manager::manager::{
    FunctionManager,
    IManager
};


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedFunction {
    name: String,
    function: FractionalForm
}

impl NamedFunction {
    pub fn new(name: &str, function: FractionalForm) -> NamedFunction {
        NamedFunction { name: name.to_owned(), function }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function(&self) -> FractionalForm {
        self.function
    }
}

/// Functions and points exercised by the demo binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoConfiguration {
    functions: Vec<NamedFunction>,
    evaluation_points: Vec<f64>,
    failure_demo: (String, f64)
}

impl DemoConfiguration {
    pub fn new(functions: Vec<NamedFunction>,
               evaluation_points: Vec<f64>,
               failure_demo: (String, f64)) -> DemoConfiguration {
        DemoConfiguration { functions, evaluation_points, failure_demo }
    }

    pub fn default_demo() -> DemoConfiguration {
        let functions = vec![
            NamedFunction::new("linear", FractionalForm::linear(2.0, 5.0, 1.0, 1.0)),
            NamedFunction::new("quadratic", FractionalForm::quadratic(1.0, 2.0, 3.0, 1.0, 0.0, 1.0)),
            NamedFunction::new("linear_pole", FractionalForm::linear(2.0, 5.0, 1.0, -2.0)),
            NamedFunction::new("quadratic_poles", FractionalForm::quadratic(1.0, 2.0, 1.0, 1.0, 0.0, -4.0))
        ];
        DemoConfiguration::new(functions, vec![1.0, 2.0], ("linear_pole".to_owned(), 2.0))
    }

    pub fn functions(&self) -> &[NamedFunction] {
        &self.functions
    }

    pub fn evaluation_points(&self) -> &[f64] {
        &self.evaluation_points
    }

    pub fn failure_demo(&self) -> (&str, f64) {
        (self.failure_demo.0.as_str(), self.failure_demo.1)
    }

    pub fn function_manager(&self) -> FunctionManager {
        let manager = FunctionManager::new();
        for named in self.functions.iter() {
            manager.insert(named.name(), named.function());
        }
        manager
    }
}
