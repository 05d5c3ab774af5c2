use common::api::ApiError;
use common::source::{apply_provider_defaults, submit, validate, SubmitError};
use gloo_console as console;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::shell::{notify, NotificationLevel};

use super::messages::Msg;
use super::props::SourceActionEvent;
use super::state::CreateSourceComponent;

pub fn update(
    component: &mut CreateSourceComponent,
    ctx: &Context<CreateSourceComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Update(field, value) => {
            component.apply(field, value);
            true
        }
        Msg::SetEnabled(enabled) => {
            component.draft.is_disabled = !enabled;
            true
        }
        Msg::Save => {
            if component.is_loading {
                return false;
            }

            apply_provider_defaults(&mut component.draft);
            if let Err(reason) = validate(&component.draft) {
                console::warn!(format!("source form not submitted: {reason}"));
                component.touched = true;
                return true;
            }

            component.is_loading = true;
            let link = ctx.link().clone();
            let api = ctx.props().api.clone();
            let mode = ctx.props().action.clone();
            let mut draft = component.draft.clone();
            spawn_local(async move {
                let result = submit(&api, &mode, &mut draft).await;
                link.send_message(Msg::Saved(result));
            });
            true
        }
        Msg::Loaded(result) => {
            component.is_fetching = false;
            match result {
                Ok(draft) => component.draft = draft,
                Err(e) => {
                    console::error!(format!("cannot load source: {e}"));
                    notify(NotificationLevel::Error, &format!("Failed to load source: {e}"));
                }
            }
            true
        }
        Msg::Saved(result) => {
            component.is_loading = false;
            match result {
                Ok(record) => ctx.props().on_action.emit(SourceActionEvent {
                    action: ctx.props().action.clone(),
                    data: record,
                }),
                Err(SubmitError::Invalid(_)) => component.touched = true,
                Err(SubmitError::Api(ApiError::Validation(message))) => {
                    component.touched = true;
                    notify(NotificationLevel::Error, &message);
                }
                Err(SubmitError::Api(e)) => {
                    console::error!(format!("source {} failed: {e}", ctx.props().action.as_str()));
                    notify(NotificationLevel::Error, &e.to_string());
                }
            }
            true
        }
    }
}
