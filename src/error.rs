//! Error type shared by every fallible operation in the crate.
//!
//! Nothing here is recoverable at runtime: each variant is a construction-time
//! precondition that the host got wrong. Drag rejections and empty
//! classifications are defined outcomes, not errors.

#[derive(Debug, thiserror::Error)]
pub enum TrilemmaError {
    /// A polygon was requested or built with fewer than three vertices.
    #[error("degenerate polygon: {sides} sides (need at least 3)")]
    DegeneratePolygon { sides: usize },

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl TrilemmaError {
    /// Stable machine-readable code, used when errors cross into the host.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DegeneratePolygon { .. } => "E_DEGENERATE_POLYGON",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
        }
    }
}
