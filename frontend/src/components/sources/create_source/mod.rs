//! Create/update form for webhook sources.
//!
//! The component follows the same split as the rest of the dashboard:
//! `state` holds the draft, `update` reacts to messages, `view` renders.
//! In update mode the stored source is fetched on first render; saving goes
//! through `common::source::submit`, so only a resolved, valid submission
//! reaches the API. A stored source is reported through `on_action`.

use common::source::load_draft;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::CreateSourceProps;
pub use props::SourceActionEvent;
pub use state::CreateSourceComponent;

impl Component for CreateSourceComponent {
    type Message = Msg;
    type Properties = CreateSourceProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = CreateSourceComponent::new();
        component.is_fetching = ctx.props().action.source_id().is_some();
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(source_id) = ctx.props().action.source_id() {
                let link = ctx.link().clone();
                let api = ctx.props().api.clone();
                let source_id = source_id.to_string();
                spawn_local(async move {
                    let result = load_draft(&api, &source_id).await;
                    link.send_message(Msg::Loaded(result));
                });
            }
        }
    }
}
