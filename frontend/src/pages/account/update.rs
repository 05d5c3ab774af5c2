use common::api::AccountApi;
use common::model::account::ProfileForm;
use gloo_console as console;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::shell::{notify, replace_query, NotificationLevel};

use super::messages::Msg;
use super::state::AccountPage;

pub fn update(page: &mut AccountPage, ctx: &Context<AccountPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::SelectTab(tab) => {
            if page.active_tab == tab {
                return false;
            }
            page.active_tab = tab;
            replace_query(&tab.to_query());
            true
        }
        Msg::FetchProfile => {
            page.is_fetching_profile = true;
            let link = ctx.link().clone();
            let api = props.api.clone();
            let user_id = props.user_id.clone();
            spawn_local(async move {
                let result = api.fetch_user(&user_id).await;
                link.send_message(Msg::ProfileFetched(result));
            });
            true
        }
        Msg::ProfileFetched(result) => {
            page.is_fetching_profile = false;
            match result {
                Ok(profile) => page.profile_form = ProfileForm::from_profile(&profile),
                Err(e) => {
                    console::error!(format!("cannot fetch profile: {e}"));
                    notify(NotificationLevel::Error, &e.to_string());
                }
            }
            true
        }
        Msg::EditProfile(field, value) => {
            page.edit_profile(field, value);
            true
        }
        Msg::SaveProfile => {
            if page.is_saving_profile {
                return false;
            }
            if !page.profile_form.is_valid() {
                page.profile_touched = true;
                return true;
            }

            page.is_saving_profile = true;
            let link = ctx.link().clone();
            let api = props.api.clone();
            let user_id = props.user_id.clone();
            let form = page.profile_form.clone();
            spawn_local(async move {
                let result = api.update_profile(&user_id, &form).await;
                link.send_message(Msg::ProfileSaved(result));
            });
            true
        }
        Msg::ProfileSaved(result) => {
            page.is_saving_profile = false;
            match result {
                Ok(_) => {
                    page.profile_touched = false;
                    notify(NotificationLevel::Success, "Changes saved successfully!");
                    ctx.link().send_message(Msg::FetchProfile);
                }
                Err(e) => notify(NotificationLevel::Error, &e.to_string()),
            }
            true
        }
        Msg::EditPassword(field, value) => {
            page.edit_password(field, value);
            true
        }
        Msg::TogglePasswordVisibility(field) => {
            if !page.shown_passwords.remove(&field) {
                page.shown_passwords.insert(field);
            }
            true
        }
        Msg::ChangePassword => {
            if page.is_updating_password {
                return false;
            }
            if !page.password_form.is_valid() {
                page.password_touched = true;
                return true;
            }

            page.is_updating_password = true;
            let link = ctx.link().clone();
            let api = props.api.clone();
            let user_id = props.user_id.clone();
            let form = page.password_form.clone();
            spawn_local(async move {
                let result = api.change_password(&user_id, &form).await;
                link.send_message(Msg::PasswordChanged(result));
            });
            true
        }
        Msg::PasswordChanged(result) => {
            page.is_updating_password = false;
            match result {
                Ok(message) => {
                    page.password_form = Default::default();
                    page.password_touched = false;
                    page.shown_passwords.clear();
                    notify(NotificationLevel::Success, &message);
                }
                Err(e) => notify(NotificationLevel::Error, &e.to_string()),
            }
            true
        }
        Msg::Logout => {
            if page.is_logging_out {
                return false;
            }
            page.is_logging_out = true;
            let link = ctx.link().clone();
            let api = props.api.clone();
            spawn_local(async move {
                let result = api.logout().await;
                link.send_message(Msg::LoggedOut(result));
            });
            true
        }
        Msg::LoggedOut(result) => {
            page.is_logging_out = false;
            if let Err(e) = result {
                console::warn!(format!("logout request failed, ending the session anyway: {e}"));
            }
            props.on_logout.emit(());
            true
        }
    }
}
