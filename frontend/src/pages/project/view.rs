use common::model::project::sidebar_items;
use yew::prelude::*;

use super::state::ProjectPage;

pub fn view(page: &ProjectPage, ctx: &Context<ProjectPage>) -> Html {
    let props = ctx.props();
    let project_type = page.project.as_ref().map(|project| project.project_type);
    let title = match &page.project {
        Some(project) => project.name.clone(),
        None if page.is_loading => "Loading project...".to_string(),
        None => props.project_id.clone(),
    };

    html! {
        <div class={classes!("project-layout", page.show_full_sidebar.then_some("full-sidebar"))}>
            <nav class="project-sidebar">
                <h2 class="project-name">{ title }</h2>
                <ul>
                    { for sidebar_items(project_type).into_iter().map(|item| html! {
                        <li>
                            <a
                                class={classes!("sidebar-item", format!("icon-{}", item.icon))}
                                href={format!("/projects/{}{}", props.project_id, item.route)}
                                title={item.name}
                            >
                                if page.show_full_sidebar {
                                    <span>{ item.name }</span>
                                }
                            </a>
                        </li>
                    }) }
                </ul>
                <a class="sidebar-item icon-settings" href="/user-settings" title="Account settings">
                    if page.show_full_sidebar {
                        <span>{ "Account settings" }</span>
                    }
                </a>
            </nav>
            <main class="project-content">
                { for props.children.iter() }
            </main>
        </div>
    }
}
