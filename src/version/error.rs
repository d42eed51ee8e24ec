use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Invalid python version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("Invalid requires-python specifiers '{input}': {reason}")]
    InvalidSpecifiers { input: String, reason: String },

    #[error("No candidate python versions were given")]
    NoCandidates,
}
