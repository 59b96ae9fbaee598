use leptos::ev;
use leptos::prelude::*;

use crate::core::models::Author;
use crate::features::projects::{add_comment, use_registry};

// Lets the freelancer answer in a project's thread from the dashboard.
#[component]
pub fn ReplyBox(#[prop(into)] project_id: String) -> impl IntoView {
    let registry = use_registry();
    let (text, set_text) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let message = text.get_untracked();
        if message.trim().is_empty() {
            return;
        }
        if add_comment(registry, project_id.clone(), Author::Freelancer, message).is_some() {
            set_text.set(String::new());
        }
    };

    view! {
        <form class="reply-box" on:submit=handle_submit>
            <input
                type="text"
                placeholder="Reply to client..."
                on:input=move |ev| set_text.set(event_target_value(&ev))
                prop:value=move || text.get()
            />
            <button type="submit" class="btn-secondary" disabled=move || text.get().trim().is_empty()>
                "SEND"
            </button>
        </form>
    }
}
