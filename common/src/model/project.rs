use serde::{Deserialize, Serialize};

use super::wire_enum;

/// Window width (px) above which the project sidebar is shown expanded.
pub const FULL_SIDEBAR_MIN_WIDTH: f64 = 1150.0;

wire_enum! {
    pub enum ProjectType as "project type" {
        Incoming => "incoming",
        Outgoing => "outgoing",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub uid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    /// Opaque project settings, kept in the session context for other pages.
    #[serde(default)]
    pub config: serde_json::Value,
}

impl Project {
    pub fn is_outgoing(&self) -> bool {
        self.project_type == ProjectType::Outgoing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
}

pub const SIDEBAR_ITEMS: [SidebarItem; 4] = [
    SidebarItem { name: "Events", icon: "events", route: "/events" },
    SidebarItem { name: "Sources", icon: "sources", route: "/sources" },
    SidebarItem { name: "Subscriptions", icon: "subscriptions", route: "/subscriptions" },
    SidebarItem { name: "Apps", icon: "apps", route: "/apps" },
];

/// Sidebar entries for a project. Outgoing projects have no sources.
pub fn sidebar_items(project_type: Option<ProjectType>) -> Vec<SidebarItem> {
    SIDEBAR_ITEMS
        .iter()
        .copied()
        .filter(|item| !(project_type == Some(ProjectType::Outgoing) && item.route == "/sources"))
        .collect()
}

pub fn shows_full_sidebar(screen_width: f64) -> bool {
    screen_width > FULL_SIDEBAR_MIN_WIDTH
}
