use thiserror::Error;

use crate::function::fractionalfunction::EvaluationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManagerError {
    #[error("key '{0}' not found")]
    NameNotFound(String),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError)
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFound(name.to_owned())
    }
}
