//! API error handling
//!
//! HTTP statuses map onto a small taxonomy; everything else is a
//! transport or decoding failure. No error here is fatal to the caller;
//! re-invoking the triggering action is always a valid retry.

use reqwest::StatusCode;
use thiserror::Error;

use domain_portfolio::PortError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected status {status}: {message}")]
    Unexpected { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response decoding error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-success HTTP status plus body text to an error
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest(body),
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden(body),
            StatusCode::NOT_FOUND => ApiError::NotFound(body),
            StatusCode::CONFLICT => ApiError::Conflict(body),
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(body),
            status if status.is_server_error() => ApiError::Server {
                status: status.as_u16(),
                message: body,
            },
            status => ApiError::Unexpected {
                status: status.as_u16(),
                message: body,
            },
        }
    }
}

impl From<ApiError> for PortError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(msg) => PortError::NotFound(msg),
            ApiError::BadRequest(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Conflict(msg)
            | ApiError::Validation(msg) => PortError::Rejected(msg),
            ApiError::Unauthorized => PortError::Rejected("unauthorized".to_string()),
            ApiError::Server { status, message } | ApiError::Unexpected { status, message } => {
                PortError::Unavailable(format!("status {}: {}", status, message))
            }
            ApiError::Transport(err) => PortError::Transport(err.to_string()),
            ApiError::Decode(msg) => PortError::InvalidResponse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "no job".to_string()),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, String::new()),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            ApiError::Server { status: 502, .. }
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::IM_A_TEAPOT, String::new()),
            ApiError::Unexpected { status: 418, .. }
        ));
    }

    #[test]
    fn test_port_error_conversion() {
        let port: PortError =
            ApiError::from_status(StatusCode::NOT_FOUND, "job 9".to_string()).into();
        assert!(matches!(port, PortError::NotFound(_)));

        let port: PortError = ApiError::Decode("bad json".to_string()).into();
        assert!(matches!(port, PortError::InvalidResponse(_)));
    }
}
