use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback shown when an error response carries no message of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

/// Fixed message for calls that never received a response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// One kind per failure class the pipeline can report. The `Display` of each
/// variant is the exact string callers surface to the user; anything more
/// structured (status codes, retry hints) deliberately does not survive past
/// this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server no longer accepts the stored credential. Raising this kind
    /// also triggers the pipeline's clear-and-redirect effect.
    #[error("{0}")]
    AuthenticationExpired(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ServerFault(String),
    /// No response arrived at all (connectivity failure or timeout).
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Unreachable,
    /// The exchange could not be interpreted: unserializable request body or
    /// an undecodable response payload.
    #[error("{0}")]
    Malformed(String),
    /// Raised by callers before any network call is issued; never produced by
    /// the pipeline itself.
    #[error("{0}")]
    ValidationFailed(String),
}

impl ApiError {
    /// Stable identifier for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::AuthenticationExpired(_) => "auth_expired",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::NotFound(_) => "not_found",
            ApiError::ServerFault(_) => "server_fault",
            ApiError::Unreachable => "unreachable",
            ApiError::Malformed(_) => "malformed",
            ApiError::ValidationFailed(_) => "validation_failed",
        }
    }
}

/// Maps an error response to its kind. Pure: the expiry side effect is applied
/// separately by the pipeline, never from here.
pub fn classify(status: u16, message: Option<String>) -> ApiError {
    let message = message
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

    match status {
        401 => ApiError::AuthenticationExpired(message),
        403 => ApiError::Forbidden(message),
        404 => ApiError::NotFound(message),
        _ => ApiError::ServerFault(message),
    }
}
