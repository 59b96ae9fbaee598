use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{client_link, navigate, AppView};
use crate::core::models::{Project, ProjectStatus};
use crate::core::services::browser;
use crate::features::dashboard::components::{EmailDrafter, ReplyBox};
use crate::features::projects::format::{comment_count, short_date};
use crate::features::projects::{use_project, StatusBadge};

const COPIED_RESET_MS: u32 = 2_000;

#[component]
pub fn ProjectCard(#[prop(into)] project_id: String) -> impl IntoView {
    let project = use_project(project_id.clone());
    let (copied, set_copied) = signal(false);

    let field = move |f: fn(&Project) -> String| {
        move || project.with(|p| p.as_ref().map(f).unwrap_or_default())
    };
    let status = Signal::derive(move || {
        project.with(|p| p.as_ref().map(|p| p.status).unwrap_or(ProjectStatus::Pending))
    });

    let copy_link = {
        let link = client_link(&browser::app_base_url(), &project_id);
        move |_| {
            let link = link.clone();
            spawn_local(async move {
                match browser::copy_to_clipboard(&link).await {
                    Ok(()) => {
                        set_copied.set(true);
                        TimeoutFuture::new(COPIED_RESET_MS).await;
                        set_copied.set(false);
                    }
                    Err(e) => tracing::warn!(error = %e, "could not copy client link"),
                }
            });
        }
    };

    let open_client_view = {
        let view = AppView::Client(project_id.clone());
        move |_| navigate(&view)
    };

    let latest_comment = move || {
        project.with(|p| {
            p.as_ref()
                .and_then(|p| p.comments.last())
                .map(|c| format!("{}: {}", c.author.display_name(), c.text))
        })
    };

    view! {
        <article class="project-card">
            <div class="project-thumb">
                <img src=field(|p| p.image_url.clone()) alt=field(|p| p.title.clone()) />
            </div>
            <div class="project-body">
                <div class="project-card-header">
                    <h3>{field(|p| p.title.clone())}</h3>
                    <StatusBadge status=status />
                </div>
                <p class="project-client">{field(|p| p.client_name.clone())}</p>
                <div class="project-stats">
                    <span>{field(|p| comment_count(p.comments.len()))}</span>
                    <span>
                        {field(|p| match p.approval_data.as_ref() {
                            Some(approval) if p.status.is_approved() => format!("Approved {}", short_date(approval.approved_at)),
                            _ => format!("Created {}", short_date(p.created_at)),
                        })}
                    </span>
                </div>
                {move || latest_comment().map(|text| view! { <p class="latest-comment">{text}</p> })}
                <div class="project-actions">
                    <button type="button" class="btn-primary" on:click=copy_link>
                        {move || if copied.get() { "Copied!" } else { "Copy client link" }}
                    </button>
                    <button type="button" class="btn-secondary" on:click=open_client_view>
                        "Open client view"
                    </button>
                </div>
                <EmailDrafter project=project />
                <ReplyBox project_id=project_id.clone() />
            </div>
        </article>
    }
}
