use thiserror::Error;

use crate::model::PostId;

/// Result type alias using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code. The HTTP layer only ever branches
/// on the kind: `InvalidInput` re-presents a form, `NotFound` sends the user
/// back to the listing, everything else is a server failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Configuration,
    Template,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::Template => "ERR_TEMPLATE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind is a user-facing condition the request can recover from
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExErrorKind::InvalidInput | ExErrorKind::NotFound)
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus
/// context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for blog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlogError {
    // ===== Validation Errors =====
    /// Title or content was absent or empty
    #[error("Title and content are required")]
    MissingPostFields,

    /// Comment content was absent or empty
    #[error("Comment cannot be empty")]
    EmptyComment,

    // ===== Lookup Errors =====
    /// No post with this id exists
    #[error("Post not found: {post_id}")]
    PostNotFound { post_id: PostId },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<BlogError> for ExError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::MissingPostFields => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_post")
                .with_message("Title and content are required"),

            BlogError::EmptyComment => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_comment")
                .with_message("Comment cannot be empty"),

            BlogError::PostNotFound { post_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(post_id.to_string())
                .with_message("Post not found"),

            BlogError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            BlogError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for BlogError {
    fn from(err: serde_json::Error) -> Self {
        BlogError::Serialization {
            message: err.to_string(),
        }
    }
}
