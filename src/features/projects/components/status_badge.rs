use leptos::prelude::*;

use crate::core::models::ProjectStatus;

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<ProjectStatus>) -> impl IntoView {
    view! {
        <span class=move || format!("status-badge {}", status.get().css_class())>
            {move || status.get().as_str()}
        </span>
    }
}
