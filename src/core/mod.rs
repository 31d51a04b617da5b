pub mod activator;
pub mod triggers;

pub use crate::domain::model::{Activation, Strategy};
pub use crate::domain::ports::{BundleInterpreter, Factory, GlobalScope, HostPage, ResourceLoader};
pub use crate::utils::error::Result;
