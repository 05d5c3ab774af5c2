use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod session;
mod shell;

fn main() {
    yew::Renderer::<App>::new().render();
}
