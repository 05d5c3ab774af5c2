//! Markup of the source form.
//!
//! The verifier section only renders the payload group of the selected
//! verifier type. Provider types ask for the secret alone and show the
//! signature settings the provider dictates.

use common::model::source::{Encoding, HashAlgorithm, Provider, SourceClass, VerifierType};
use common::source::{is_valid, FormMode};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{Field, Msg};
use super::state::CreateSourceComponent;

/// One `<option>`: wire value and label.
type SelectOption = (&'static str, &'static str);

pub fn view(component: &CreateSourceComponent, ctx: &Context<CreateSourceComponent>) -> Html {
    let link = ctx.link();
    let draft = &component.draft;
    let title = match ctx.props().action {
        FormMode::Create => "Create Source",
        FormMode::Update(_) => "Update Source",
    };

    if component.is_fetching {
        return html! { <div class="source-form loading">{ "Loading source..." }</div> };
    }

    let submit_disabled = component.is_loading || !is_valid(draft);

    html! {
        <div class="source-form">
            <h2 class="source-form-title">{ title }</h2>

            { build_source_class_picker(component, link) }

            { text_input(
                link,
                "Source name",
                Field::Name,
                &draft.name,
                "text",
                component.shows_error(draft.name.is_empty()),
            ) }

            { select_input(
                link,
                "Source verification",
                Field::VerifierType,
                draft.verifier.verifier_type.map(VerifierType::as_str),
                VerifierType::ALL.iter().map(|kind| (kind.as_str(), kind.label())).collect(),
                component.shows_error(draft.verifier.verifier_type.is_none()),
            ) }

            { build_verifier_fields(component, link) }

            <label class="source-toggle">
                <input
                    type="checkbox"
                    checked={!draft.is_disabled}
                    onchange={link.callback(|e: Event| {
                        Msg::SetEnabled(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                { "Enable source" }
            </label>

            <button
                type="button"
                class="primary-button"
                disabled={submit_disabled}
                onclick={link.callback(|_| Msg::Save)}
            >
                { if component.is_loading { "Saving..." } else { title } }
            </button>
        </div>
    }
}

fn build_source_class_picker(
    component: &CreateSourceComponent,
    link: &Scope<CreateSourceComponent>,
) -> Html {
    let selected = component.draft.source_class;
    html! {
        <div class="source-class-picker">
            <span class="field-label">{ "Source type" }</span>
            { for SourceClass::ALL.iter().map(|class| {
                let class = *class;
                let available = class == SourceClass::Http;
                let active = selected == Some(class);
                html! {
                    <button
                        type="button"
                        class={classes!("source-class-card", active.then_some("active"))}
                        disabled={!available}
                        onclick={link.callback(move |_| Msg::Update(Field::SourceClass, class.as_str().to_string()))}
                    >
                        <strong>{ class.label() }</strong>
                        <p>{ class.description() }</p>
                    </button>
                }
            }) }
            if component.shows_error(selected.is_none()) {
                <p class="field-error">{ "Source type is required" }</p>
            }
        </div>
    }
}

fn build_verifier_fields(
    component: &CreateSourceComponent,
    link: &Scope<CreateSourceComponent>,
) -> Html {
    let verifier = &component.draft.verifier;
    match verifier.verifier_type {
        None | Some(VerifierType::Noop) => html! {},
        Some(VerifierType::ApiKey) => html! {
            <div class="verifier-fields">
                { text_input(link, "Header name", Field::ApiKeyHeaderName,
                    &verifier.api_key.header_name, "text",
                    component.shows_error(verifier.api_key.header_name.is_empty())) }
                { text_input(link, "Header value", Field::ApiKeyHeaderValue,
                    &verifier.api_key.header_value, "text",
                    component.shows_error(verifier.api_key.header_value.is_empty())) }
            </div>
        },
        Some(VerifierType::BasicAuth) => html! {
            <div class="verifier-fields">
                { text_input(link, "Username", Field::BasicAuthUsername,
                    &verifier.basic_auth.username, "text",
                    component.shows_error(verifier.basic_auth.username.is_empty())) }
                { text_input(link, "Password", Field::BasicAuthPassword,
                    &verifier.basic_auth.password, "password",
                    component.shows_error(verifier.basic_auth.password.is_empty())) }
            </div>
        },
        Some(VerifierType::Hmac) => html! {
            <div class="verifier-fields">
                { select_input(link, "Hash", Field::HmacHash,
                    verifier.hmac.hash.map(HashAlgorithm::as_str),
                    HashAlgorithm::ALL.iter().map(|hash| (hash.as_str(), hash.as_str())).collect(),
                    component.shows_error(verifier.hmac.hash.is_none())) }
                { text_input(link, "Header", Field::HmacHeader,
                    &verifier.hmac.header, "text",
                    component.shows_error(verifier.hmac.header.is_empty())) }
                { text_input(link, "Webhook signing secret", Field::HmacSecret,
                    &verifier.hmac.secret, "text",
                    component.shows_error(verifier.hmac.secret.is_empty())) }
                { select_input(link, "Encoding", Field::HmacEncoding,
                    verifier.hmac.encoding.map(Encoding::as_str),
                    Encoding::ALL.iter().map(|encoding| (encoding.as_str(), encoding.as_str())).collect(),
                    component.shows_error(verifier.hmac.encoding.is_none())) }
            </div>
        },
        Some(kind) => match kind.provider() {
            Some(provider) => build_provider_fields(component, link, provider),
            None => html! {},
        },
    }
}

fn build_provider_fields(
    component: &CreateSourceComponent,
    link: &Scope<CreateSourceComponent>,
    provider: Provider,
) -> Html {
    let preset = provider.preset();
    let secret = &component.draft.verifier.hmac.secret;
    let label = format!("{} webhook secret", VerifierType::from(provider).label());
    html! {
        <div class="verifier-fields">
            { text_input(link, &label, Field::HmacSecret, secret, "text",
                component.shows_error(secret.is_empty())) }
            <p class="field-hint">
                { format!("Signed with {} in {}, sent as {}", preset.hash, preset.encoding, preset.header) }
            </p>
        </div>
    }
}

fn text_input(
    link: &Scope<CreateSourceComponent>,
    label: &str,
    field: Field,
    value: &str,
    input_type: &'static str,
    invalid: bool,
) -> Html {
    html! {
        <label class={classes!("form-field", invalid.then_some("invalid"))}>
            <span class="field-label">{ label }</span>
            <input
                type={input_type}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::Update(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            if invalid {
                <span class="field-error">{ format!("{label} is required") }</span>
            }
        </label>
    }
}

fn select_input(
    link: &Scope<CreateSourceComponent>,
    label: &str,
    field: Field,
    selected: Option<&str>,
    options: Vec<SelectOption>,
    invalid: bool,
) -> Html {
    html! {
        <label class={classes!("form-field", invalid.then_some("invalid"))}>
            <span class="field-label">{ label }</span>
            <select onchange={link.callback(move |e: Event| {
                Msg::Update(field, e.target_unchecked_into::<HtmlSelectElement>().value())
            })}>
                <option value="" selected={selected.is_none()}>{ "Select" }</option>
                { for options.into_iter().map(|(value, text)| html! {
                    <option value={value} selected={selected == Some(value)}>
                        { text }
                    </option>
                }) }
            </select>
            if invalid {
                <span class="field-error">{ format!("{label} is required") }</span>
            }
        </label>
    }
}
