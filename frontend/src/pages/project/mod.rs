//! Project shell: sidebar navigation around the selected project section.
//!
//! Fetches the project on mount (and when the route switches project) and
//! hands it to `on_project_loaded`. The sidebar collapses to icons at narrow
//! widths; a window `resize` listener keeps it in sync.

use gloo_console as console;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::html::Scope;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::ProjectProps;
pub use state::ProjectPage;

impl Component for ProjectPage {
    type Message = Msg;
    type Properties = ProjectProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = ProjectPage::new(state::window_width());
        page.resize_listener = listen_resize(ctx.link().clone());
        ctx.link().send_message(Msg::FetchProject);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().project_id != old_props.project_id {
            self.project = None;
            ctx.link().send_message(Msg::FetchProject);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.resize_listener.take()) {
            window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

fn listen_resize(link: Scope<ProjectPage>) -> Option<Closure<dyn FnMut()>> {
    let window = web_sys::window()?;
    let listener = Closure::<dyn FnMut()>::new(move || link.send_message(Msg::Resized));
    if let Err(e) =
        window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
    {
        console::warn!("cannot listen for window resizes", e);
        return None;
    }
    Some(listener)
}
