use leptos::prelude::*;

use crate::core::models::Project;
use crate::core::services::{MetadataAssistant, ProjectRegistry};

// Shared handle to the registry. The signal is fed by a registry
// subscription, so views always read what the registry last committed.
#[derive(Clone, Copy)]
pub struct RegistryContext {
    pub(crate) registry: StoredValue<ProjectRegistry, LocalStorage>,
    pub projects: ReadSignal<Vec<Project>>,
}

#[derive(Clone, Copy)]
pub struct AssistantContext(StoredValue<MetadataAssistant, LocalStorage>);

impl AssistantContext {
    pub fn get(&self) -> MetadataAssistant {
        self.0.get_value()
    }
}

pub fn provide_registry(mut registry: ProjectRegistry) -> RegistryContext {
    let projects = RwSignal::new(registry.projects().to_vec());
    registry.subscribe(move |snapshot| projects.set(snapshot.to_vec()));

    let context = RegistryContext {
        registry: StoredValue::new_local(registry),
        projects: projects.read_only(),
    };
    provide_context(context);
    context
}

pub fn provide_assistant(assistant: MetadataAssistant) {
    provide_context(AssistantContext(StoredValue::new_local(assistant)));
}

pub fn use_registry() -> RegistryContext {
    use_context::<RegistryContext>().expect("registry context")
}

pub fn use_assistant() -> AssistantContext {
    use_context::<AssistantContext>().expect("assistant context")
}

// Live view of one project; `None` while the id is unknown.
pub fn use_project(project_id: String) -> Memo<Option<Project>> {
    let projects = use_registry().projects;
    Memo::new(move |_| {
        projects.with(|projects| projects.iter().find(|p| p.id == project_id).cloned())
    })
}
