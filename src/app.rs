use leptos::prelude::*;
use leptos::ev;

use crate::core::config::AppConfig;
use crate::core::services::browser;
use crate::core::services::seed::seed_projects;
use crate::core::services::{
    BlobBackend, LocalStorageBackend, MemoryBackend, MetadataAssistant, PersistentStore,
    ProjectRegistry, ProjectStore,
};
use crate::features::projects::{provide_assistant, provide_registry};
use crate::pages::{ClientView, Dashboard};

const CLIENT_PREFIX: &str = "#/client/";

#[derive(Clone, Debug, PartialEq)]
pub enum AppView {
    Dashboard,
    Client(String),
}

impl AppView {
    pub fn from_hash(hash: &str) -> Self {
        match hash.strip_prefix(CLIENT_PREFIX) {
            Some(project_id) => AppView::Client(project_id.to_string()),
            None => AppView::Dashboard,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            AppView::Dashboard => "#/".to_string(),
            AppView::Client(project_id) => format!("{}{}", CLIENT_PREFIX, project_id),
        }
    }
}

// Link a client opens to review one project.
pub fn client_link(base_url: &str, project_id: &str) -> String {
    format!("{}{}", base_url, AppView::Client(project_id.to_string()).to_hash())
}

// Changes the route through the location hash; the hashchange listener
// updates the view.
pub fn navigate(view: &AppView) {
    browser::set_hash(&view.to_hash());
}

pub fn open_store(config: &AppConfig) -> Box<dyn ProjectStore> {
    fn boxed<B: BlobBackend + 'static>(backend: B, key: &str) -> Box<dyn ProjectStore> {
        Box::new(PersistentStore::new(backend, key))
    }

    if LocalStorageBackend::is_available() {
        boxed(LocalStorageBackend, &config.storage_key)
    } else {
        tracing::warn!("localStorage unavailable, projects will not survive a reload");
        boxed(MemoryBackend::new(), &config.storage_key)
    }
}

// A store that cannot be read leaves the app on sample data; the stored blob
// stays as it is until the first mutation overwrites it.
pub fn open_registry(store: Box<dyn ProjectStore>) -> ProjectRegistry {
    match store.load() {
        Ok(projects) => ProjectRegistry::with_projects(store, projects),
        Err(e) => {
            tracing::error!(error = %e, "could not load saved projects, starting from sample data");
            ProjectRegistry::with_projects(store, seed_projects())
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (current_view, set_current_view) = signal(AppView::from_hash(&browser::current_hash()));

    provide_registry(open_registry(open_store(&config)));
    provide_assistant(MetadataAssistant::gemini(&config.assistant));

    let _ = window_event_listener(ev::hashchange, move |_| {
        let view = AppView::from_hash(&browser::current_hash());
        tracing::debug!(?view, "route changed");
        set_current_view.set(view);
    });

    view! {
        <main class="app">
            {move || match current_view.get() {
                AppView::Dashboard => view! { <Dashboard /> }.into_any(),
                AppView::Client(project_id) => view! { <ClientView project_id=project_id /> }.into_any(),
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Author;

    const KEY: &str = "approveflow_projects";

    #[test]
    fn corrupt_saved_data_falls_back_to_sample_projects() {
        let backend = MemoryBackend::with_value(KEY, "{not json");
        let mut registry = open_registry(Box::new(PersistentStore::new(backend.clone(), KEY)));

        let ids: Vec<&str> = registry.projects().iter().map(|p| p.id.as_str()).collect();
        let seed_ids: Vec<String> = seed_projects().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, seed_ids);
        assert_eq!(backend.raw(KEY).as_deref(), Some("{not json"));

        registry
            .add_comment("p1", Author::Freelancer, "Updated palette attached")
            .unwrap()
            .unwrap();
        let saved: Vec<crate::core::models::Project> =
            serde_json::from_str(&backend.raw(KEY).unwrap()).unwrap();
        assert_eq!(saved.len(), seed_ids.len());
    }

    #[test]
    fn readable_saved_data_is_used_as_is() {
        let backend = MemoryBackend::with_value(KEY, "[]");
        let registry = open_registry(Box::new(PersistentStore::new(backend, KEY)));
        assert!(registry.projects().is_empty());
    }

    #[test]
    fn client_hash_selects_client_view() {
        assert_eq!(AppView::from_hash("#/client/p1"), AppView::Client("p1".to_string()));
    }

    #[test]
    fn anything_else_is_the_dashboard() {
        assert_eq!(AppView::from_hash(""), AppView::Dashboard);
        assert_eq!(AppView::from_hash("#/"), AppView::Dashboard);
        assert_eq!(AppView::from_hash("#/clients"), AppView::Dashboard);
    }

    #[test]
    fn empty_client_id_still_routes_to_client_view() {
        assert_eq!(AppView::from_hash("#/client/"), AppView::Client(String::new()));
    }

    #[test]
    fn client_link_round_trips_through_the_router() {
        let link = client_link("https://app.example/", "abc-123");
        assert_eq!(link, "https://app.example/#/client/abc-123");

        let hash = &link[link.find('#').unwrap()..];
        assert_eq!(AppView::from_hash(hash), AppView::Client("abc-123".to_string()));
    }
}
