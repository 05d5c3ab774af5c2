//! The contract between the dashboard pages and whatever serves the API.
//!
//! The traits use `async fn` directly: implementations are used through
//! generics only, and the browser client's futures are not `Send`.

use crate::model::account::{PasswordChangeForm, ProfileForm, UserProfile};
use crate::model::project::Project;
use crate::model::source::{SourceRecord, SourceSubmission};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    /// The server rejected the request body.
    #[error("{0}")]
    Validation(String),
    #[error("session expired, please log in again")]
    Unauthorized,
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Maps a non-success HTTP status and the server's message to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 422 => ApiError::Validation(message),
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Network(format!("unexpected status {status}: {message}")),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait SourceApi {
    async fn fetch_source(&self, source_id: &str) -> Result<SourceRecord, ApiError>;

    async fn create_source(&self, submission: &SourceSubmission) -> Result<SourceRecord, ApiError>;

    async fn update_source(
        &self,
        source_id: &str,
        submission: &SourceSubmission,
    ) -> Result<SourceRecord, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait AccountApi {
    async fn fetch_user(&self, user_id: &str) -> Result<UserProfile, ApiError>;

    async fn update_profile(
        &self,
        user_id: &str,
        form: &ProfileForm,
    ) -> Result<UserProfile, ApiError>;

    /// Returns the server's confirmation message.
    async fn change_password(
        &self,
        user_id: &str,
        form: &PasswordChangeForm,
    ) -> Result<String, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait ProjectApi {
    async fn fetch_project(&self, project_id: &str) -> Result<Project, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_onto_the_error_taxonomy() {
        assert_eq!(
            ApiError::from_status(400, "name is required"),
            ApiError::Validation("name is required".into())
        );
        assert_eq!(ApiError::from_status(422, "x"), ApiError::Validation("x".into()));
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "gone"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(503, "db down"),
            ApiError::Network("unexpected status 503: db down".into())
        );
    }
}
