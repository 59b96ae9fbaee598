use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::Project;
use crate::core::services::{Assisted, EmailPurpose};
use crate::features::projects::use_assistant;

#[component]
pub fn EmailDrafter(project: Memo<Option<Project>>) -> impl IntoView {
    let assistant = use_assistant();
    let (draft, set_draft) = signal(None::<Assisted<String>>);
    let (is_drafting, set_is_drafting) = signal(false);

    let purpose = move || {
        project.with(|p| {
            p.as_ref()
                .map(|p| EmailPurpose::for_status(p.status))
                .unwrap_or(EmailPurpose::Initial)
        })
    };

    let generate = move |_| {
        let Some(current) = project.get_untracked() else {
            return;
        };
        let purpose = EmailPurpose::for_status(current.status);
        let assistant = assistant.get();

        set_is_drafting.set(true);
        spawn_local(async move {
            let result = assistant
                .draft_email(&current.client_name, &current.title, purpose)
                .await;
            set_draft.set(Some(result));
            set_is_drafting.set(false);
        });
    };

    view! {
        <div class="email-drafter">
            <button
                type="button"
                class="btn-secondary"
                disabled=move || is_drafting.get()
                on:click=generate
            >
                {move || {
                    if is_drafting.get() {
                        "Drafting...".to_string()
                    } else {
                        format!("Draft {}", purpose().label().to_lowercase())
                    }
                }}
            </button>
            {move || {
                draft
                    .get()
                    .map(|draft| {
                        let failed = draft.is_fallback();
                        view! {
                            <div class="email-draft" class:draft-error=failed>
                                <Show when=move || failed>
                                    <p class="hint">"The assistant is unavailable right now."</p>
                                </Show>
                                <textarea rows="6" readonly=failed prop:value=draft.into_inner()></textarea>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
