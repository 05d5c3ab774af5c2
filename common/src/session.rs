//! Authentication and active-project context.
//!
//! The session is an explicit value: it is established when a login result is
//! persisted, restored once at startup, handed to the API client, and torn
//! down on logout. Nothing reads storage behind the caller's back.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// What a successful login leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub uid: String,
    pub token: AuthToken,
}

impl AuthSession {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token.access_token)
    }
}

/// Decodes a stored session. Missing, `"undefined"` and malformed values all
/// mean "not logged in".
pub fn decode_stored_session(raw: Option<&str>) -> Option<AuthSession> {
    match raw.map(str::trim) {
        None | Some("") | Some("undefined") | Some("null") => None,
        Some(raw) => serde_json::from_str(raw).ok(),
    }
}

/// Durable home of the auth session (browser storage in the dashboard).
pub trait SessionStore {
    type Error;

    fn load(&self) -> Result<Option<AuthSession>, Self::Error>;
    fn persist(&self, session: &AuthSession) -> Result<(), Self::Error>;
    fn clear(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveProject {
    pub uid: String,
    pub config: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    auth: Option<AuthSession>,
    project: Option<ActiveProject>,
}

impl SessionContext {
    pub fn restore<S: SessionStore>(store: &S) -> Result<Self, S::Error> {
        Ok(Self {
            auth: store.load()?,
            project: None,
        })
    }

    pub fn login<S: SessionStore>(
        &mut self,
        store: &S,
        session: AuthSession,
    ) -> Result<(), S::Error> {
        store.persist(&session)?;
        self.auth = Some(session);
        Ok(())
    }

    /// Ends the session. The in-memory state is dropped even if the store fails.
    pub fn logout<S: SessionStore>(&mut self, store: &S) -> Result<(), S::Error> {
        self.auth = None;
        self.project = None;
        store.clear()
    }

    pub fn auth(&self) -> Option<&AuthSession> {
        self.auth.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.uid.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Switches to a project. Re-entering the current project keeps its config.
    pub fn enter_project(&mut self, project_id: &str) {
        if self.project_id() != Some(project_id) {
            self.project = Some(ActiveProject {
                uid: project_id.to_string(),
                config: None,
            });
        }
    }

    pub fn set_project_config(&mut self, project_id: &str, config: serde_json::Value) {
        self.enter_project(project_id);
        if let Some(project) = self.project.as_mut() {
            project.config = Some(config);
        }
    }

    pub fn project(&self) -> Option<&ActiveProject> {
        self.project.as_ref()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project.as_ref().map(|project| project.uid.as_str())
    }
}
