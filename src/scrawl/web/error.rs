use crate::error::ScrawlError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl ScrawlError {
    pub fn status(&self) -> StatusCode {
        match self {
            ScrawlError::ItemNotFound(_) => StatusCode::NOT_FOUND,
            ScrawlError::ItemExists(_) => StatusCode::CONFLICT,
            ScrawlError::InvalidId(_) | ScrawlError::Upload(_) => StatusCode::BAD_REQUEST,
            ScrawlError::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ScrawlError::Io(_)
            | ScrawlError::Serialization(_)
            | ScrawlError::Template(_)
            | ScrawlError::Task(_)
            | ScrawlError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScrawlError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
