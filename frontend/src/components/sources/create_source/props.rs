use common::model::source::SourceRecord;
use common::source::FormMode;
use yew::prelude::*;

use crate::api::ApiClient;

/// Emitted once a source has been stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceActionEvent {
    pub action: FormMode,
    pub data: SourceRecord,
}

#[derive(Properties, PartialEq, Clone)]
pub struct CreateSourceProps {
    pub api: ApiClient,

    /// `Update(id)` loads the stored source on first render and saves with PUT.
    #[prop_or(FormMode::Create)]
    pub action: FormMode,

    #[prop_or_default]
    pub on_action: Callback<SourceActionEvent>,
}
