use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlueError {
    #[error("Bundle request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("URL resolution failed: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Registry query failed: {message}")]
    RegistryError { message: String },

    #[error("Global scope inspection failed: {message}")]
    ScopeError { message: String },

    #[error("Bundle evaluation failed: {message}")]
    EvalError { message: String },

    #[error("Factory construction failed: {message}")]
    ConstructionError { message: String },

    #[error("Script injection failed: {message}")]
    InjectionError { message: String },

    #[error("Invalid config value for {field}='{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GlueError>;
