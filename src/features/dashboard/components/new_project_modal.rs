use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::{ev, html::Dialog};

use crate::core::services::browser;
use crate::core::services::{Assisted, ImageMetadata, InlineImage};
use crate::features::projects::{create_project, use_assistant, use_registry};

// A generated title replaces the field unless it is blank; the stand-in title
// only fills an empty field.
fn title_to_fill(current: &str, result: &Assisted<ImageMetadata>) -> Option<String> {
    let (candidate, overwrite) = match result {
        Assisted::Generated(metadata) => (&metadata.title, true),
        Assisted::Fallback(metadata) => (&metadata.title, false),
    };
    if candidate.trim().is_empty() {
        return None;
    }
    if overwrite || current.trim().is_empty() {
        Some(candidate.clone())
    } else {
        None
    }
}

#[component]
pub fn NewProjectModal(dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    let registry = use_registry();
    let assistant = use_assistant();

    let (title, set_title) = signal(String::new());
    let (client_name, set_client_name) = signal(String::new());
    let (image_url, set_image_url) = signal(String::new());
    let (summary, set_summary) = signal(None::<String>);
    let (is_analyzing, set_is_analyzing) = signal(false);

    let reset = move || {
        set_title.set(String::new());
        set_client_name.set(String::new());
        set_image_url.set(String::new());
        set_summary.set(None);
        set_is_analyzing.set(false);
    };

    let close_modal = move |_| {
        reset();
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let handle_file = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        match browser::object_url(&file) {
            Ok(url) => set_image_url.set(url),
            Err(e) => {
                tracing::error!(error = %e, "could not preview selected file");
                return;
            }
        }

        set_is_analyzing.set(true);
        let assistant = assistant.get();
        spawn_local(async move {
            let image = match browser::read_as_data_url(&file).await {
                Ok(data_url) => InlineImage::from_data_url(&data_url),
                Err(e) => {
                    tracing::warn!(error = %e, "could not read selected file");
                    None
                }
            };

            if let Some(image) = image {
                let result = assistant.describe_image(image).await;
                if let Some(suggested) = title_to_fill(&title.get_untracked(), &result) {
                    set_title.set(suggested);
                }
                if let Assisted::Generated(metadata) = result {
                    set_summary.set(Some(metadata.summary));
                }
            }
            set_is_analyzing.set(false);
        });
    };

    let ready = move || {
        !title.get().trim().is_empty()
            && !client_name.get().trim().is_empty()
            && !image_url.get().is_empty()
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !ready() {
            return;
        }

        let created = create_project(
            registry,
            title.get_untracked().trim().to_string(),
            client_name.get_untracked().trim().to_string(),
            image_url.get_untracked(),
        );
        if created.is_some() {
            reset();
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="modal new-project-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"New Approval Request"</h2>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <label class="upload-area" class:has-image=move || !image_url.get().is_empty()>
                        <Show
                            when=move || !image_url.get().is_empty()
                            fallback=|| view! {
                                <div class="upload-placeholder">
                                    <p>"Click to upload asset"</p>
                                    <p class="hint">"Images or Screenshots"</p>
                                </div>
                            }
                        >
                            <img class="upload-preview" src=move || image_url.get() alt="Preview" />
                        </Show>
                        <input type="file" accept="image/*" class="hidden" on:change=handle_file />
                    </label>

                    <div class="form-group">
                        <label>"PROJECT TITLE"</label>
                        <input
                            type="text"
                            placeholder="e.g. Q4 Social Campaign"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                        <p class="hint" class:analyzing=move || is_analyzing.get()>
                            {move || {
                                if is_analyzing.get() {
                                    "AI is generating title...".to_string()
                                } else {
                                    summary
                                        .get()
                                        .unwrap_or_else(|| "Auto-filled by AI based on image".to_string())
                                }
                            }}
                        </p>
                    </div>

                    <div class="form-group">
                        <label>"CLIENT NAME"</label>
                        <input
                            type="text"
                            placeholder="e.g. Acme Inc."
                            on:input=move |ev| set_client_name.set(event_target_value(&ev))
                            prop:value=move || client_name.get()
                            required
                        />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary" disabled=move || !ready()>
                            "CREATE APPROVAL LINK"
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(title: &str) -> ImageMetadata {
        ImageMetadata {
            title: title.to_string(),
            summary: "A poster.".to_string(),
        }
    }

    #[test]
    fn generated_title_replaces_what_was_typed() {
        let result = Assisted::Generated(metadata("Event Poster"));
        assert_eq!(title_to_fill("my title", &result), Some("Event Poster".to_string()));
    }

    #[test]
    fn blank_generated_title_keeps_what_was_typed() {
        let result = Assisted::Generated(metadata("  "));
        assert_eq!(title_to_fill("my title", &result), None);
        assert_eq!(title_to_fill("", &result), None);
    }

    #[test]
    fn fallback_title_only_fills_an_empty_field() {
        let result = Assisted::Fallback(ImageMetadata::fallback());
        assert_eq!(title_to_fill("my title", &result), None);
        assert_eq!(title_to_fill(" ", &result), Some("New Project".to_string()));
    }
}
