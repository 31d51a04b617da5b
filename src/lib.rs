pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{GlobalBinding, SimulatedPage, StaticGlobals, UnsupportedInterpreter};
pub use config::ActivatorConfig;
pub use core::activator::Activator;
pub use core::triggers::activate_when_ready;
pub use domain::model::{Activation, CreateOptions, CrossOrigin, PlayerElement, ScriptRequest, Strategy};
pub use domain::ports::{BundleInterpreter, Factory, GlobalScope, HostPage, ResourceLoader};
pub use utils::error::{GlueError, Result};
