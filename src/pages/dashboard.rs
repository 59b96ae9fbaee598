use leptos::html::Dialog;
use leptos::prelude::*;

use crate::core::models::ProjectStatus;
use crate::features::dashboard::{NewProjectModal, ProjectCard};
use crate::features::projects::use_registry;

#[component]
pub fn Dashboard() -> impl IntoView {
    let projects = use_registry().projects;
    let dialog_ref = NodeRef::<Dialog>::new();

    let open_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if let Err(e) = dialog.show_modal() {
                tracing::error!(error = ?e, "could not open new project dialog");
            }
        }
    };

    let count = move |status: ProjectStatus| {
        projects.with(|ps| ps.iter().filter(|p| p.status == status).count())
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div>
                    <h1>"ApproveFlow"</h1>
                    <p class="hint">"Share a link, get a sign-off."</p>
                </div>
                <button class="btn-primary" on:click=open_modal>"+ NEW APPROVAL REQUEST"</button>
            </header>

            <div class="status-summary">
                {ProjectStatus::all()
                    .into_iter()
                    .map(|status| view! {
                        <div class=format!("summary-tile {}", status.css_class())>
                            <span class="summary-count">{move || count(status)}</span>
                            <span class="summary-label">{status.as_str()}</span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || projects.with(|ps| !ps.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"No approval requests yet."</p>
                        <p class="hint">"Upload an asset to create your first client link."</p>
                    </div>
                }
            >
                <div class="projects-grid">
                    <For
                        each=move || projects.with(|ps| ps.iter().map(|p| p.id.clone()).collect::<Vec<_>>())
                        key=|id| id.clone()
                        let:id
                    >
                        <ProjectCard project_id=id />
                    </For>
                </div>
            </Show>

            <NewProjectModal dialog_ref=dialog_ref />
        </div>
    }
}
