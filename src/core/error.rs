use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Source file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rendered output container never showed up on the page
    #[error("target element not found: {selector}")]
    ElementNotFound { selector: String },

    /// Failure reported by the browser automation backend, passed through as-is
    #[error("browser automation failed: {0}")]
    Automation(#[from] anyhow::Error),

    #[error("render task failed: {0}")]
    Task(String),
}
