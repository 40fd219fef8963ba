//! Configuration error type.

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Root configuration document not found.
    #[error("Configuration file not found: {0}")]
    NotFound(String),
    /// Parent document named by `INHERIT` not found.
    #[error("Inherited configuration not found: {name} (inherited by {referrer})")]
    ParentNotFound {
        /// Parent name as written in the child document.
        name: String,
        /// Document that declared the parent.
        referrer: String,
    },
    /// Inheritance chain refers back to one of its own documents.
    #[error("Configuration inheritance cycle: {}", .0.join(" -> "))]
    Cycle(Vec<String>),
    /// YAML parsing error.
    #[error("YAML parse error in {name}: {source}")]
    Parse {
        /// Document being parsed.
        name: String,
        /// Underlying parser error.
        #[source]
        source: serde_yaml::Error,
    },
    /// Top-level document is not a mapping.
    #[error("Configuration error: {name} must be a mapping at the top level")]
    NotAMapping {
        /// Offending document.
        name: String,
    },
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Invalid argument to a YAML tag.
    #[error("Invalid !{tag} tag: {message}")]
    Tag {
        /// Tag name without the leading `!`.
        tag: String,
        /// What was wrong with the tagged value.
        message: String,
    },
    /// Environment variable error during path expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field being expanded (e.g. "`INHERIT`").
        field: String,
        /// Error message (e.g. "${`SHARED_DIR`} not set").
        message: String,
    },
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
