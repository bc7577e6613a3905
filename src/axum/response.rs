use super::super::error::*;

use ::axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }

            Self::Fetch(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "API fetch failed").into_response()
            }
        }
    }
}

/// Bad request response.
pub fn bad_request(message: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, message).into_response()
}
