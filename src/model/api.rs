use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Body of every failure response.
///
/// The HTTP status line always carries the status of the error that produced
/// the body, so the body holds the message only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDto {
    pub message: String,
}

/// Body of `GET /`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HelloDto {
    pub hello: String,
}

/// Generic acknowledgement returned by routes that have nothing else to say.
///
/// Rendered as `{ "code": <code>, "message": <message> }` with the HTTP status
/// set to `code`, so the status line and the body never disagree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DefaultApiResponse {
    code: u16,
    message: String,
}

impl DefaultApiResponse {
    /// Creates an acknowledgement with an explicit 2xx status.
    ///
    /// Failures are expressed as `ApiError`, never as an acknowledgement.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        debug_assert!(
            status.is_success(),
            "acknowledgement built with non-success status {}",
            status
        );

        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    /// Creates a `200 OK` acknowledgement.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, message)
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for DefaultApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_defaults_to_200() {
        let response = DefaultApiResponse::success("Vote recorded");

        assert_eq!(response.code(), 200);
        assert_eq!(response.message(), "Vote recorded");
    }

    #[test]
    fn serializes_code_and_message_only() {
        let response = DefaultApiResponse::new(StatusCode::ACCEPTED, "Queued");

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "code": 202, "message": "Queued" }));
    }

    #[test]
    fn status_line_matches_code() {
        let response = DefaultApiResponse::new(StatusCode::CREATED, "Created").into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-success status")]
    fn rejects_failure_status() {
        let _ = DefaultApiResponse::new(StatusCode::NOT_FOUND, "Not found");
    }
}
