use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use lexicon_types::errors::{AppError, ApplicationError};

/// Turns application errors into JSON error responses.
#[derive(Debug)]
pub struct ApiError(pub ApplicationError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ApplicationError::App(AppError::UnknownLeaderboardType(_))
            | ApplicationError::App(AppError::UnknownTimeRange(_)) => StatusCode::BAD_REQUEST,
            ApplicationError::App(AppError::MissingUserId) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError(err)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        let err: ApiError = AppError::UnknownTimeRange("YEAR".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: ApiError = AppError::MissingUserId.into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_storage_errors_map_to_500() {
        let err: ApiError = ApplicationError::Infrastructure("down".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
