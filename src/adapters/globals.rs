use crate::domain::ports::{Factory, GlobalScope};
use crate::utils::error::{GlueError, Result};
use std::sync::{Arc, Mutex};

/// One binding in a simulated global namespace.
#[derive(Clone)]
pub enum GlobalBinding {
    /// Exposes the construction capability.
    Factory(Arc<dyn Factory>),
    /// Present but without a construction capability.
    Opaque,
    /// Inspection of this binding errors, like a host object with a
    /// throwing property getter.
    Poisoned,
}

/// Scripted global scope. Bindings can be added after construction, which is
/// how a side-effecting bundle registers its factory.
#[derive(Clone, Default)]
pub struct StaticGlobals {
    bindings: Arc<Mutex<Vec<(String, GlobalBinding)>>>,
}

impl StaticGlobals {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bind(&self, name: &str, binding: GlobalBinding) {
        if let Ok(mut bindings) = self.bindings.lock() {
            bindings.push((name.to_string(), binding));
        }
    }
}

impl GlobalScope for StaticGlobals {
    fn probe(&self, name: &str) -> Result<Option<Arc<dyn Factory>>> {
        let bindings = self.bindings.lock().map_err(|_| GlueError::ScopeError {
            message: "global scope lock poisoned".to_string(),
        })?;
        match bindings.iter().find(|(bound, _)| bound == name) {
            Some((_, GlobalBinding::Factory(factory))) => Ok(Some(Arc::clone(factory))),
            Some((_, GlobalBinding::Opaque)) => Ok(None),
            Some((_, GlobalBinding::Poisoned)) => Err(GlueError::ScopeError {
                message: format!("binding '{}' is not inspectable", name),
            }),
            None => Ok(None),
        }
    }

    fn binding_names(&self) -> Vec<String> {
        self.bindings
            .lock()
            .map(|bindings| bindings.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default()
    }
}
