use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::response::ApiResponse;
use common::model::UnknownVariant;
use common::source::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum SourceStoreError {
    #[error("source not found")]
    NotFound,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("stored source is corrupt: {0}")]
    Corrupt(String),
    #[error("background task failed: {0}")]
    Blocking(String),
}

impl From<serde_json::Error> for SourceStoreError {
    fn from(value: serde_json::Error) -> Self {
        SourceStoreError::Corrupt(value.to_string())
    }
}

impl From<UnknownVariant> for SourceStoreError {
    fn from(value: UnknownVariant) -> Self {
        SourceStoreError::Corrupt(value.to_string())
    }
}

impl From<tokio::task::JoinError> for SourceStoreError {
    fn from(value: tokio::task::JoinError) -> Self {
        SourceStoreError::Blocking(value.to_string())
    }
}

impl ResponseError for SourceStoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            SourceStoreError::NotFound => StatusCode::NOT_FOUND,
            SourceStoreError::Invalid(_) => StatusCode::BAD_REQUEST,
            SourceStoreError::Database(_)
            | SourceStoreError::Corrupt(_)
            | SourceStoreError::Blocking(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::failure(self.to_string()))
    }
}
