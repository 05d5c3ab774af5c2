//! Account settings: profile info, password change and logout.
//!
//! The active tab is read from `?activePage=` when the page mounts and written
//! back on every switch. The profile is fetched on first render.

use common::model::account::AccountTab;
use yew::prelude::*;

use crate::shell::current_query;

mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::AccountProps;
pub use state::AccountPage;

impl Component for AccountPage {
    type Message = Msg;
    type Properties = AccountProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AccountPage::new(AccountTab::from_query(&current_query()))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::FetchProfile);
        }
    }
}
