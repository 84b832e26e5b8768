use thiserror::Error;

pub type Result<T> = std::result::Result<T, LaunchpadError>;

#[derive(Debug, Error)]
pub enum LaunchpadError {
    #[error("config error: {0}")]
    ConfigError(String),

    #[error("project error: {0}")]
    ProjectError(String),

    #[error("browser error: {0}")]
    BrowserError(String),

    #[error("failed to launch browser: {0}")]
    LaunchError(String),

    /// Precondition for generating a spec: a project must be active.
    /// The message text is a stable contract with consumers.
    #[error("Cannot set currentSpec without active project")]
    NoActiveProject,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
