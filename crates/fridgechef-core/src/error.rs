//! Error types for the Fridgechef backend.

use thiserror::Error;

/// A shared error type for the entire Fridgechef workspace.
///
/// Only failures that must reach the caller live here. Outcomes the user can
/// fix by saying something else (no session, unknown recipe, ...) are modelled
/// as [`crate::cooking::Rejection`] on a normal response instead.
#[derive(Error, Debug, Clone)]
pub enum FridgeError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// An external collaborator (catalog, inventory, language model, speech) failed
    #[error("Collaborator '{service}' failed: {message}")]
    Collaborator {
        service: &'static str,
        message: String,
    },

    /// An external collaborator did not answer in time
    #[error("Collaborator '{service}' timed out after {seconds}s")]
    Timeout { service: &'static str, seconds: u64 },

    /// The transcription service heard nothing usable
    #[error("No speech detected in audio")]
    NoSpeechDetected,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FridgeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Collaborator error
    pub fn collaborator(service: &'static str, message: impl Into<String>) -> Self {
        Self::Collaborator {
            service,
            message: message.into(),
        }
    }

    /// Creates a Timeout error
    pub fn timeout(service: &'static str, seconds: u64) -> Self {
        Self::Timeout { service, seconds }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if the caller may retry the same request.
    ///
    /// Collaborator failures and timeouts are transient from the point of view
    /// of the orchestrator. Everything else will fail again the same way.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Collaborator { .. } | Self::Timeout { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FridgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FridgeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (used by binaries wrapping library calls)
impl From<anyhow::Error> for FridgeError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, FridgeError>`.
pub type Result<T> = std::result::Result<T, FridgeError>;
