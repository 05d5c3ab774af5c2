//! Dashboard paths the frontend knows how to render.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Account,
    Project { project_id: String },
    NewSource { project_id: String },
    EditSource { project_id: String, source_id: String },
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            ["login"] => Route::Login,
            ["user-settings"] => Route::Account,
            ["projects", project_id, "sources", "new"] => Route::NewSource {
                project_id: project_id.to_string(),
            },
            ["projects", project_id, "sources", source_id] => Route::EditSource {
                project_id: project_id.to_string(),
                source_id: source_id.to_string(),
            },
            ["projects", "new"] => Route::NotFound,
            ["projects", project_id, ..] => Route::Project {
                project_id: project_id.to_string(),
            },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Account => "/user-settings".to_string(),
            Route::Project { project_id } => format!("/projects/{project_id}"),
            Route::NewSource { project_id } => format!("/projects/{project_id}/sources/new"),
            Route::EditSource {
                project_id,
                source_id,
            } => format!("/projects/{project_id}/sources/{source_id}"),
            Route::NotFound => "/".to_string(),
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        match self {
            Route::Project { project_id }
            | Route::NewSource { project_id }
            | Route::EditSource { project_id, .. } => Some(project_id),
            _ => None,
        }
    }

    /// The id segment the source form uses to pick update mode.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            Route::EditSource { source_id, .. } => Some(source_id),
            _ => None,
        }
    }
}
