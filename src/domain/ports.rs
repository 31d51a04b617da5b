use crate::domain::model::{CreateOptions, PlayerElement, ScriptRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Construction capability exposed by an external player bundle. The return
/// value and error contract of the real factory are out of our control, so
/// callers must treat any error as non-fatal.
pub trait Factory: Send + Sync {
    fn create(&self, src: &str, target: &PlayerElement, options: &CreateOptions) -> Result<()>;
}

/// Facade over the hosting page: element registry, document queries and the
/// readiness signal used for trigger scheduling.
#[async_trait]
pub trait HostPage: Send + Sync {
    fn element_registered(&self, tag: &str) -> Result<bool>;

    /// All elements of the tag, in document order. Filtering for a usable
    /// `src` is the caller's job.
    fn player_elements(&self, tag: &str) -> Vec<PlayerElement>;

    /// Base URL the same-origin bundle path is resolved against.
    fn base_url(&self) -> Result<Url>;

    fn is_loading(&self) -> bool;

    /// Resolves once the page content has loaded; immediately if it already has.
    async fn content_loaded(&self);
}

/// Probe of the host's global namespace for a factory binding.
pub trait GlobalScope: Send + Sync {
    /// Capability check of a single binding. A probe error aborts that entry
    /// only, never a whole scan.
    fn probe(&self, name: &str) -> Result<Option<Arc<dyn Factory>>>;

    fn binding_names(&self) -> Vec<String>;
}

/// Interpretation of fetched bundle text. Evaluation is host-specific, so it
/// stays behind this seam.
pub trait BundleInterpreter: Send + Sync {
    /// Strict reading: the bundle is an expression yielding a factory.
    fn eval_expression(&self, code: &str) -> Result<Arc<dyn Factory>>;

    /// Loose reading: run the bundle for side effects, which may register a
    /// factory into the global scope for a later cascade run.
    fn eval_program(&self, code: &str) -> Result<()>;
}

/// Appends a script-loading element to the page. Invocation, not load
/// completion, is the contract.
pub trait ResourceLoader: Send + Sync {
    fn inject_script(&self, request: &ScriptRequest) -> Result<()>;
}
