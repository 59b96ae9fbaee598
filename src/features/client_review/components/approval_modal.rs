use leptos::prelude::*;

// Confirmation step before an approval is recorded.
#[component]
pub fn ApprovalModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-content approval-modal">
                    <h3>"Confirm Approval?"</h3>
                    <p class="hint">
                        "This will lock the project status and generate an approval certificate. This action is time-stamped."
                    </p>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="button" class="btn-approve" on:click=move |_| on_confirm.run(())>
                            "Yes, Approve"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
