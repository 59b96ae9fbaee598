use leptos::ev;
use leptos::prelude::*;

use crate::core::models::{Author, Comment};
use crate::features::projects::format::clock_time;

#[component]
pub fn CommentThread(#[prop(into)] comments: Signal<Vec<Comment>>) -> impl IntoView {
    view! {
        <div class="comment-thread">
            <Show
                when=move || comments.with(|c| !c.is_empty())
                fallback=|| view! {
                    <div class="comment-empty">
                        <p>"No comments yet."</p>
                        <p>"Type below to give feedback."</p>
                    </div>
                }
            >
                <For
                    each=move || comments.get()
                    key=|comment| comment.id.clone()
                    let:comment
                >
                    <div
                        class="comment"
                        class:from-freelancer=comment.author == Author::Freelancer
                        class:from-client=comment.author == Author::Client
                    >
                        <div class="comment-bubble">{comment.text.clone()}</div>
                        <span class="comment-meta">
                            {format!("{} • {}", comment.author.display_name(), clock_time(comment.timestamp))}
                        </span>
                    </div>
                </For>
            </Show>
        </div>
    }
}

#[component]
pub fn CommentInput(#[prop(into)] on_send: Callback<String>) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let message = text.get_untracked();
        if message.trim().is_empty() {
            return;
        }
        on_send.run(message);
        set_text.set(String::new());
    };

    view! {
        <form class="comment-input" on:submit=handle_submit>
            <input
                type="text"
                placeholder="Type feedback here..."
                on:input=move |ev| set_text.set(event_target_value(&ev))
                prop:value=move || text.get()
            />
            <button type="submit" disabled=move || text.get().trim().is_empty()>"Send"</button>
        </form>
    }
}
