use leptos::prelude::*;

#[component]
pub fn ActionBar(
    #[prop(into)] on_request_changes: Callback<()>,
    #[prop(into)] on_approve: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="action-bar">
            <p class="hint">"By clicking Approve, you agree this work is complete."</p>
            <div class="action-buttons">
                <button type="button" class="btn-secondary" on:click=move |_| on_request_changes.run(())>
                    "Request Changes"
                </button>
                <button type="button" class="btn-approve" on:click=move |_| on_approve.run(())>
                    "✓ Approve"
                </button>
            </div>
        </div>
    }
}
