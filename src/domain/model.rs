use serde::{Deserialize, Serialize};

/// Handle to a markup element requesting the player via its `src` attribute.
/// The node id is assigned by the host page and only has to be stable for the
/// lifetime of one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerElement {
    pub node: u64,
    pub src: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOptions {
    pub preload: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossOrigin {
    Anonymous,
    UseCredentials,
}

impl CrossOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrossOrigin::Anonymous => "anonymous",
            CrossOrigin::UseCredentials => "use-credentials",
        }
    }
}

/// Description of a script-loading element handed to the resource loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRequest {
    pub url: String,
    pub cross_origin: CrossOrigin,
    pub asynchronous: bool,
}

impl ScriptRequest {
    /// Last-resort remote load: credentials disabled, asynchronous.
    pub fn remote(url: &str) -> Self {
        Self {
            url: url.to_string(),
            cross_origin: CrossOrigin::Anonymous,
            asynchronous: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    GlobalFactory,
    LocalBundle,
}

/// Outcome of one cascade run, for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    AlreadyRegistered,
    NoTarget,
    Mounted(Strategy),
    RemoteRequested,
}
