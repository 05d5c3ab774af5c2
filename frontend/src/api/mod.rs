//! HTTP client for the dashboard API.
//!
//! Requests carry the session's bearer token when there is one. Bodies are
//! wrapped in `ApiResponse`; a non-success status is mapped onto `ApiError`
//! using the message of the error envelope when the server sent one.

use common::api::{AccountApi, ApiError, ProjectApi, SourceApi};
use common::model::account::{PasswordChangeForm, ProfileForm, UserProfile};
use common::model::project::Project;
use common::model::response::ApiResponse;
use common::model::source::{SourceRecord, SourceSubmission};
use common::session::AuthSession;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: Option<AuthSession>,
    project_id: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Option<AuthSession>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            project_id: None,
        }
    }

    /// Scopes source requests to a project.
    pub fn with_project(mut self, project_id: Option<&str>) -> Self {
        self.project_id = project_id.map(str::to_string);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn sources_url(&self, source_id: Option<&str>) -> Result<String, ApiError> {
        let project_id = self
            .project_id
            .as_deref()
            .ok_or_else(|| ApiError::Validation("no project is selected".to_string()))?;
        let mut path = format!("/projects/{project_id}/sources");
        if let Some(source_id) = source_id {
            path.push('/');
            path.push_str(source_id);
        }
        Ok(self.url(&path))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Some(session) => builder.header("Authorization", &session.bearer()),
            None => builder,
        }
    }
}

fn network(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

async fn execute<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
) -> Result<ApiResponse<T>, ApiError> {
    let response = request.map_err(network)?.send().await.map_err(network)?;

    if response.ok() {
        return response.json::<ApiResponse<T>>().await.map_err(network);
    }

    let status = response.status();
    let message = match response.json::<ApiResponse<Value>>().await {
        Ok(envelope) => envelope.message,
        Err(_) => response.status_text(),
    };
    Err(ApiError::from_status(status, message))
}

impl SourceApi for ApiClient {
    async fn fetch_source(&self, source_id: &str) -> Result<SourceRecord, ApiError> {
        let url = self.sources_url(Some(source_id))?;
        execute(self.authorize(Request::get(&url)).build())
            .await?
            .into_data()
    }

    async fn create_source(&self, submission: &SourceSubmission) -> Result<SourceRecord, ApiError> {
        let url = self.sources_url(None)?;
        execute(self.authorize(Request::post(&url)).json(submission))
            .await?
            .into_data()
    }

    async fn update_source(
        &self,
        source_id: &str,
        submission: &SourceSubmission,
    ) -> Result<SourceRecord, ApiError> {
        let url = self.sources_url(Some(source_id))?;
        execute(self.authorize(Request::put(&url)).json(submission))
            .await?
            .into_data()
    }
}

impl AccountApi for ApiClient {
    async fn fetch_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        let url = self.url(&format!("/users/{user_id}/profile"));
        execute(self.authorize(Request::get(&url)).build())
            .await?
            .into_data()
    }

    async fn update_profile(
        &self,
        user_id: &str,
        form: &ProfileForm,
    ) -> Result<UserProfile, ApiError> {
        let url = self.url(&format!("/users/{user_id}/profile"));
        execute(self.authorize(Request::put(&url)).json(form))
            .await?
            .into_data()
    }

    async fn change_password(
        &self,
        user_id: &str,
        form: &PasswordChangeForm,
    ) -> Result<String, ApiError> {
        let url = self.url(&format!("/users/{user_id}/password"));
        let response = execute::<Value>(self.authorize(Request::put(&url)).json(form)).await?;
        Ok(response.message)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let url = self.url("/auth/logout");
        execute::<Value>(self.authorize(Request::post(&url)).build()).await?;
        Ok(())
    }
}

impl ProjectApi for ApiClient {
    async fn fetch_project(&self, project_id: &str) -> Result<Project, ApiError> {
        let url = self.url(&format!("/projects/{project_id}"));
        execute(self.authorize(Request::get(&url)).build())
            .await?
            .into_data()
    }
}
