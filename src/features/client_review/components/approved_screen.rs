use leptos::prelude::*;

#[component]
pub fn ApprovedScreen(#[prop(into)] on_return: Callback<()>) -> impl IntoView {
    view! {
        <div class="approved-screen">
            <div class="approved-icon">"✓"</div>
            <h1>"Approved!"</h1>
            <p>"Thank you for your feedback. A confirmation certificate has been generated."</p>
            <button type="button" class="link-button" on:click=move |_| on_return.run(())>
                "Return to project"
            </button>
        </div>
    }
}
