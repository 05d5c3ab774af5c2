use common::api::ApiError;
use common::model::project::Project;

pub enum Msg {
    FetchProject,
    ProjectFetched(Result<Project, ApiError>),
    /// Sent by the window `resize` listener.
    Resized,
}
