use crate::domain::ports::{BundleInterpreter, Factory};
use crate::utils::error::{GlueError, Result};
use std::sync::Arc;

/// Interpreter for hosts without a script evaluator. Every interpretation
/// fails, so a fetched bundle never yields a factory and the cascade moves
/// on to remote injection.
pub struct UnsupportedInterpreter;

impl BundleInterpreter for UnsupportedInterpreter {
    fn eval_expression(&self, _code: &str) -> Result<Arc<dyn Factory>> {
        Err(GlueError::EvalError {
            message: "host has no script evaluator".to_string(),
        })
    }

    fn eval_program(&self, _code: &str) -> Result<()> {
        Err(GlueError::EvalError {
            message: "host has no script evaluator".to_string(),
        })
    }
}
