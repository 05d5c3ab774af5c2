//! Root component: owns the session context and picks the page for the
//! current path.
//!
//! The session is restored from local storage once, here, and handed down
//! as an `ApiClient`. Pages report back through callbacks: the project shell
//! with the fetched project, the source form with a stored source, the
//! account page after logout.

use common::model::project::Project;
use common::route::Route;
use common::session::SessionContext;
use common::source::FormMode;
use gloo_console as console;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::sources::create_source::{CreateSourceComponent, SourceActionEvent};
use crate::config::API_BASE_URL;
use crate::pages::account::AccountPage;
use crate::pages::project::ProjectPage;
use crate::session::LocalSessionStore;
use crate::shell::{self, notify, NotificationLevel};

pub enum Msg {
    Navigate(Route),
    RouteChanged,
    ProjectLoaded(Project),
    SourceSaved(SourceActionEvent),
    LoggedOut,
}

pub struct App {
    session: SessionContext,
    route: Route,
    _popstate_listener: Option<Closure<dyn FnMut()>>,
}

impl App {
    fn api(&self) -> ApiClient {
        ApiClient::new(API_BASE_URL, self.session.auth().cloned())
            .with_project(self.session.project_id())
    }

    /// Applies a route: unauthenticated visitors are sent to the login page,
    /// project routes select the active project.
    fn enter(&mut self, route: Route) {
        let route = if self.session.is_authenticated() {
            route
        } else {
            Route::Login
        };
        if let Some(project_id) = route.project_id() {
            self.session.enter_project(project_id);
        }
        self.route = route;
    }

    fn view_project(&self, ctx: &Context<Self>, project_id: &str, content: Html) -> Html {
        html! {
            <ProjectPage
                api={self.api()}
                project_id={project_id.to_string()}
                on_project_loaded={ctx.link().callback(Msg::ProjectLoaded)}
            >
                { content }
            </ProjectPage>
        }
    }

    fn view_source_form(&self, ctx: &Context<Self>, project_id: &str) -> Html {
        let action = FormMode::from_route_id(self.route.source_id());
        let key = format!("{project_id}:{}", action.source_id().unwrap_or("new"));
        let form = html! {
            <CreateSourceComponent
                key={key}
                api={self.api()}
                action={action}
                on_action={ctx.link().callback(Msg::SourceSaved)}
            />
        };
        self.view_project(ctx, project_id, form)
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let session = SessionContext::restore(&LocalSessionStore).unwrap_or_else(|e| {
            console::error!(format!("cannot restore the session: {e}"));
            SessionContext::default()
        });

        let mut app = Self {
            session,
            route: Route::NotFound,
            _popstate_listener: listen_popstate(ctx.link().clone()),
        };
        let path = shell::current_path();
        app.enter(Route::parse(&path));
        if app.route == Route::Login && path != app.route.path() {
            shell::push_path(&app.route.path());
        }
        app
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                self.enter(route);
                shell::push_path(&self.route.path());
                true
            }
            Msg::RouteChanged => {
                self.enter(Route::parse(&shell::current_path()));
                true
            }
            Msg::ProjectLoaded(project) => {
                self.session.set_project_config(&project.uid, project.config);
                false
            }
            Msg::SourceSaved(event) => {
                let verb = match event.action {
                    FormMode::Create => "created",
                    FormMode::Update(_) => "updated",
                };
                notify(
                    NotificationLevel::Success,
                    &format!("Source {} {verb} successfully", event.data.name),
                );
                let Some(project_id) = self.session.project_id() else {
                    return false;
                };
                let path = format!("/projects/{project_id}/sources");
                shell::push_path(&path);
                self.enter(Route::parse(&path));
                true
            }
            Msg::LoggedOut => {
                if let Err(e) = self.session.logout(&LocalSessionStore) {
                    console::error!(format!("cannot clear the stored session: {e}"));
                }
                self.enter(Route::Login);
                shell::push_path(&self.route.path());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.route {
            Route::Login => html! {
                <div class="login-placeholder">
                    <h2>{ "You are signed out" }</h2>
                    <p>{ "Log in again to open your projects." }</p>
                </div>
            },
            Route::Account => match self.session.user_id() {
                Some(user_id) => html! {
                    <AccountPage
                        api={self.api()}
                        user_id={user_id.to_string()}
                        on_logout={ctx.link().callback(|_| Msg::LoggedOut)}
                    />
                },
                None => html! {},
            },
            Route::Project { project_id } => self.view_project(ctx, project_id, html! {}),
            Route::NewSource { project_id } | Route::EditSource { project_id, .. } => {
                self.view_source_form(ctx, project_id)
            }
            Route::NotFound => {
                let onclick = ctx.link().callback(|_| Msg::Navigate(Route::Account));
                html! {
                    <div class="not-found">
                        <h2>{ "Page not found" }</h2>
                        <button type="button" {onclick}>{ "Go to account settings" }</button>
                    </div>
                }
            }
        }
    }
}

fn listen_popstate(link: yew::html::Scope<App>) -> Option<Closure<dyn FnMut()>> {
    let window = web_sys::window()?;
    let listener = Closure::<dyn FnMut()>::new(move || link.send_message(Msg::RouteChanged));
    window
        .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}
