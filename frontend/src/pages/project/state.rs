use common::model::project::{shows_full_sidebar, Project};
use wasm_bindgen::closure::Closure;

/// State of the project shell.
pub struct ProjectPage {
    /// The fetched project; `None` until the first fetch succeeds and again
    /// while switching to another project.
    pub project: Option<Project>,

    /// A project fetch is in flight.
    pub is_loading: bool,

    /// Labels are shown next to the sidebar icons.
    pub show_full_sidebar: bool,

    /// Kept alive for as long as the window `resize` listener is registered.
    pub resize_listener: Option<Closure<dyn FnMut()>>,
}

impl ProjectPage {
    pub fn new(screen_width: f64) -> Self {
        Self {
            project: None,
            is_loading: false,
            show_full_sidebar: shows_full_sidebar(screen_width),
            resize_listener: None,
        }
    }

    /// Returns whether the sidebar layout changed.
    pub fn set_screen_width(&mut self, screen_width: f64) -> bool {
        let full = shows_full_sidebar(screen_width);
        let changed = full != self.show_full_sidebar;
        self.show_full_sidebar = full;
        changed
    }
}

pub fn window_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_layout_follows_the_window_width() {
        let mut page = ProjectPage::new(800.0);
        assert!(!page.show_full_sidebar);

        assert!(page.set_screen_width(1200.0));
        assert!(page.show_full_sidebar);

        assert!(!page.set_screen_width(1400.0));
        assert!(page.show_full_sidebar);

        assert!(page.set_screen_width(1150.0));
        assert!(!page.show_full_sidebar);
    }
}
