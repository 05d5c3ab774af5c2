use common::api::ProjectApi;
use gloo_console as console;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::shell::{notify, NotificationLevel};

use super::messages::Msg;
use super::state::{window_width, ProjectPage};

pub fn update(page: &mut ProjectPage, ctx: &Context<ProjectPage>, msg: Msg) -> bool {
    match msg {
        Msg::FetchProject => {
            page.is_loading = true;
            let link = ctx.link().clone();
            let api = ctx.props().api.clone();
            let project_id = ctx.props().project_id.clone();
            spawn_local(async move {
                let result = api.fetch_project(&project_id).await;
                link.send_message(Msg::ProjectFetched(result));
            });
            true
        }
        Msg::ProjectFetched(result) => {
            page.is_loading = false;
            match result {
                Ok(project) => {
                    ctx.props().on_project_loaded.emit(project.clone());
                    page.project = Some(project);
                }
                Err(e) => {
                    console::error!(format!("cannot fetch project {}: {e}", ctx.props().project_id));
                    notify(NotificationLevel::Error, &e.to_string());
                }
            }
            true
        }
        Msg::Resized => page.set_screen_width(window_width()),
    }
}
