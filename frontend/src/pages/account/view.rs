use common::model::account::AccountTab;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{Msg, PasswordField, ProfileField};
use super::state::AccountPage;

pub fn view(page: &AccountPage, ctx: &Context<AccountPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="account-page">
            <aside class="account-tabs">
                { for AccountTab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    html! {
                        <button
                            type="button"
                            class={classes!("account-tab", (page.active_tab == tab).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SelectTab(tab))}
                        >
                            { tab.label() }
                        </button>
                    }
                }) }
                <button
                    type="button"
                    class="account-tab logout"
                    disabled={page.is_logging_out}
                    onclick={link.callback(|_| Msg::Logout)}
                >
                    { if page.is_logging_out { "Logging out..." } else { "Logout" } }
                </button>
            </aside>
            <section class="account-panel">
                {
                    match page.active_tab {
                        AccountTab::Profile => build_profile_tab(page, link),
                        AccountTab::Security => build_security_tab(page, link),
                    }
                }
            </section>
        </div>
    }
}

fn build_profile_tab(page: &AccountPage, link: &Scope<AccountPage>) -> Html {
    if page.is_fetching_profile {
        return html! { <p class="loading">{ "Loading profile..." }</p> };
    }

    let form = &page.profile_form;
    let touched = page.profile_touched;
    let email_error = if form.email.is_empty() {
        Some("Email is required")
    } else if !form.email_is_valid() {
        Some("Enter a valid email")
    } else {
        None
    };

    html! {
        <div class="profile-form">
            <h3>{ "Basic Info" }</h3>
            { profile_input(link, "First name", ProfileField::FirstName, &form.first_name,
                (touched && form.first_name.is_empty()).then_some("First name is required")) }
            { profile_input(link, "Last name", ProfileField::LastName, &form.last_name,
                (touched && form.last_name.is_empty()).then_some("Last name is required")) }
            { profile_input(link, "Email", ProfileField::Email, &form.email,
                email_error.filter(|_| touched)) }
            <button
                type="button"
                class="primary-button"
                disabled={page.is_saving_profile}
                onclick={link.callback(|_| Msg::SaveProfile)}
            >
                { if page.is_saving_profile { "Saving..." } else { "Save Changes" } }
            </button>
        </div>
    }
}

fn profile_input(
    link: &Scope<AccountPage>,
    label: &'static str,
    field: ProfileField,
    value: &str,
    error: Option<&'static str>,
) -> Html {
    html! {
        <label class={classes!("form-field", error.is_some().then_some("invalid"))}>
            <span class="field-label">{ label }</span>
            <input
                type={if field == ProfileField::Email { "email" } else { "text" }}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::EditProfile(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            if let Some(error) = error {
                <span class="field-error">{ error }</span>
            }
        </label>
    }
}

fn build_security_tab(page: &AccountPage, link: &Scope<AccountPage>) -> Html {
    let form = &page.password_form;
    let mismatch = !form.password_confirmation.is_empty() && !form.passwords_match();

    html! {
        <div class="password-form">
            <h3>{ "Change Password" }</h3>
            { password_input(page, link, "Current password", PasswordField::Current) }
            { password_input(page, link, "New password", PasswordField::New) }
            { password_input(page, link, "Confirm new password", PasswordField::Confirmation) }
            if mismatch {
                <span class="field-error">{ "Passwords do not match" }</span>
            }
            <button
                type="button"
                class="primary-button"
                disabled={page.is_updating_password}
                onclick={link.callback(|_| Msg::ChangePassword)}
            >
                { if page.is_updating_password { "Updating..." } else { "Update Password" } }
            </button>
        </div>
    }
}

fn password_input(
    page: &AccountPage,
    link: &Scope<AccountPage>,
    label: &'static str,
    field: PasswordField,
) -> Html {
    let value = page.password_value(field);
    let shown = page.shown_passwords.contains(&field);
    let invalid = page.password_touched && value.is_empty();

    html! {
        <label class={classes!("form-field", invalid.then_some("invalid"))}>
            <span class="field-label">{ label }</span>
            <div class="password-input">
                <input
                    type={if shown { "text" } else { "password" }}
                    value={value.to_string()}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::EditPassword(field, e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button
                    type="button"
                    class="visibility-toggle"
                    onclick={link.callback(move |_| Msg::TogglePasswordVisibility(field))}
                >
                    { if shown { "Hide" } else { "Show" } }
                </button>
            </div>
            if invalid {
                <span class="field-error">{ format!("{label} is required") }</span>
            }
        </label>
    }
}
