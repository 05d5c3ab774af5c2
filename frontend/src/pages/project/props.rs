use common::model::project::Project;
use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectProps {
    pub api: ApiClient,
    pub project_id: String,

    /// Receives the fetched project so the app can keep its config.
    #[prop_or_default]
    pub on_project_loaded: Callback<Project>,

    /// Content of the selected project section.
    #[prop_or_default]
    pub children: Children,
}
