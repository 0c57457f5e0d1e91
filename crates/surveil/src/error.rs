use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level failures surfaced by the import endpoint
///
/// Per-name lookup failures never become an `Error`; they are folded into
/// `data: null` entries by the assembler.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<surveil_core::resolve::ResolveError> for Error {
    fn from(err: surveil_core::resolve::ResolveError) -> Self {
        Error::Internal(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
            Error::Internal(detail) => {
                log::error!("Import failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to resolve decklist",
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveil_core::resolve::ResolveError;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = Error::BadRequest("Field 'decklist' is missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_resolve_error_maps_to_500() {
        let error: Error = ResolveError::MissingLookup("Sol Ring".to_string()).into();
        assert!(matches!(error, Error::Internal(_)));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
