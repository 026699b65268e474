//! Error types for the SCIM user store.
//!
//! Every operation of the store and of the operation handler reports failures
//! through [`ScimError`]. Each variant knows the HTTP status and the RFC 7644
//! `scimType` a transport should emit for it.

/// Main error type for store and protocol operations.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// No record exists under the identifier
    #[error("Resource not found: {resource_type} with ID {id}")]
    ResourceNotFound { resource_type: String, id: String },

    /// A PATCH operation whose value or path does not fit its kind
    #[error("Malformed patch operation: {message}")]
    MalformedOperation { message: String },

    /// Filter text that cannot be parsed or uses an unsupported operator
    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    /// Every identifier of the configured width is already assigned
    #[error("Identifier space exhausted: all {capacity} identifiers are in use")]
    IdentifierSpaceExhausted { capacity: u64 },

    /// Invalid request format or parameters
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Invalid store or handler configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// SCIM `scimType` detail values from RFC 7644 section 3.12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScimErrorType {
    InvalidFilter,
    InvalidSyntax,
    InvalidValue,
}

// Convenience methods for creating common errors
impl ScimError {
    /// Create a resource not found error
    pub fn resource_not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Create a malformed patch operation error
    pub fn malformed_operation(message: impl Into<String>) -> Self {
        Self::MalformedOperation {
            message: message.into(),
        }
    }

    /// Create an invalid filter error
    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Whether this error reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    /// HTTP status code a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ResourceNotFound { .. } => 404,
            Self::MalformedOperation { .. }
            | Self::InvalidFilter { .. }
            | Self::InvalidRequest { .. }
            | Self::Json(_) => 400,
            Self::IdentifierSpaceExhausted { .. } | Self::InvalidConfiguration { .. } => 500,
        }
    }

    /// The RFC 7644 `scimType`, when one applies.
    pub fn scim_type(&self) -> Option<ScimErrorType> {
        match self {
            Self::MalformedOperation { .. } => Some(ScimErrorType::InvalidValue),
            Self::InvalidFilter { .. } => Some(ScimErrorType::InvalidFilter),
            Self::InvalidRequest { .. } | Self::Json(_) => Some(ScimErrorType::InvalidSyntax),
            _ => None,
        }
    }

    /// Machine-readable code for logs and operation metadata.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => "RESOURCE_NOT_FOUND",
            Self::MalformedOperation { .. } => "MALFORMED_OPERATION",
            Self::InvalidFilter { .. } => "INVALID_FILTER",
            Self::IdentifierSpaceExhausted { .. } => "IDENTIFIER_SPACE_EXHAUSTED",
            Self::InvalidRequest { .. } => "INVALID_REQUEST",
            Self::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            Self::Json(_) => "INVALID_JSON",
        }
    }
}

// Result type alias for convenience
pub type ScimResult<T> = Result<T, ScimError>;
