use leptos::prelude::*;

use crate::core::models::{Author, Project};
use crate::features::client_review::{
    ActionBar, ApprovalModal, ApprovedScreen, CommentInput, CommentThread,
};
use crate::features::projects::format::short_date;
use crate::features::projects::{
    add_comment, approve_project, request_changes, use_project, use_registry,
};

#[component]
pub fn ClientView(project_id: String) -> impl IntoView {
    let registry = use_registry();
    let project = use_project(project_id.clone());
    let (show_approval_modal, set_show_approval_modal) = signal(false);
    let (show_success, set_show_success) = signal(false);

    let exists = move || project.with(|p| p.is_some());
    let is_approved = move || project.with(|p| p.as_ref().is_some_and(|p| p.status.is_approved()));
    let text = move |f: fn(&Project) -> String| {
        move || project.with(|p| p.as_ref().map(f).unwrap_or_default())
    };
    let comments = Signal::derive(move || {
        project.with(|p| p.as_ref().map(|p| p.comments.clone()).unwrap_or_default())
    });

    let on_request_changes = {
        let project_id = project_id.clone();
        Callback::new(move |_| request_changes(registry, project_id.clone()))
    };

    let on_confirm_approval = {
        let project_id = project_id.clone();
        Callback::new(move |_| {
            approve_project(registry, project_id.clone());
            set_show_approval_modal.set(false);
            set_show_success.set(true);
        })
    };

    let on_send = {
        let project_id = project_id.clone();
        Callback::new(move |message: String| {
            add_comment(registry, project_id.clone(), Author::Client, message);
        })
    };

    view! {
        <Show
            when=exists
            fallback=|| view! { <div class="not-found">"Project not found"</div> }
        >
            <Show
                when=move || !show_success.get()
                fallback=move || view! {
                    <ApprovedScreen on_return=move || set_show_success.set(false) />
                }
            >
                <div class="client-view">
                    <section class="asset-pane">
                        <header class="client-header">
                            <div>
                                <h1>{text(|p| p.title.clone())}</h1>
                                <p class="hint">{text(|p| format!("For: {}", p.client_name))}</p>
                            </div>
                            <Show when=is_approved>
                                <span class="status-badge status-approved">
                                    {text(|p| {
                                        let at = p.approval_data.as_ref().map(|a| a.approved_at).unwrap_or(0);
                                        format!("Approved on {}", short_date(at))
                                    })}
                                </span>
                            </Show>
                        </header>

                        <div class="asset-frame">
                            <img src=text(|p| p.image_url.clone()) alt="Asset" />
                        </div>

                        <Show when=move || !is_approved()>
                            <ActionBar
                                on_request_changes=on_request_changes
                                on_approve=move || set_show_approval_modal.set(true)
                            />
                        </Show>
                    </section>

                    <aside class="comments-pane">
                        <h2>"Comments"</h2>
                        <CommentThread comments=comments />
                        <Show when=move || !is_approved()>
                            <CommentInput on_send=on_send />
                        </Show>
                    </aside>

                    <ApprovalModal
                        open=show_approval_modal
                        on_confirm=on_confirm_approval
                        on_cancel=move || set_show_approval_modal.set(false)
                    />
                </div>
            </Show>
        </Show>
    }
}
