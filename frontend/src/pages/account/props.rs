use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct AccountProps {
    pub api: ApiClient,

    /// Uid of the logged-in user; the app only renders the page with a session.
    pub user_id: String,

    /// Called after the logout request settled, successful or not.
    #[prop_or_default]
    pub on_logout: Callback<()>,
}
