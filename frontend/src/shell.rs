//! Browser-side effects shared by the pages: toasts and location handling.

use gloo_console as console;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    fn background(self) -> &'static str {
        match self {
            NotificationLevel::Success => "rgba(22, 101, 52, 0.92)",
            NotificationLevel::Error => "rgba(153, 27, 27, 0.92)",
        }
    }
}

/// Shows a toast at the bottom of the page for three seconds.
pub fn notify(level: NotificationLevel, message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", level.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Pushes `path` onto the history stack without reloading the page.
pub fn push_path(path: &str) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if history.push_state_with_url(&JsValue::NULL, "", Some(path)).is_err() {
        console::error!(format!("cannot navigate to {path}"));
    }
}

/// Rewrites the query string of the current entry, e.g. `?activePage=security`.
pub fn replace_query(query: &str) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    let url = format!("{}{}", current_path(), query);
    if history.replace_state_with_url(&JsValue::NULL, "", Some(&url)).is_err() {
        console::error!(format!("cannot update the location to {url}"));
    }
}
