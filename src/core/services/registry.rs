use uuid::Uuid;

use crate::core::error::{RegistryError, StoreError};
use crate::core::models::{ApprovalData, Author, Comment, Project, StatusEvent};

use super::storage::ProjectStore;

pub type SubscriptionId = usize;

type Listener = Box<dyn Fn(&[Project]) + 'static>;

// Outcome of a mutation. The change is already in memory and pushed to
// subscribers; `save_error` is set when writing it out failed.
#[derive(Debug)]
pub struct Applied<T> {
    pub value: T,
    pub save_error: Option<StoreError>,
}

impl<T> Applied<T> {
    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }
}

// Owner of the project list. Every mutation goes through a method here, is
// pushed to subscribers, then saved in full.
pub struct ProjectRegistry {
    projects: Vec<Project>,
    store: Box<dyn ProjectStore>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl ProjectRegistry {
    pub fn open(store: Box<dyn ProjectStore>) -> Result<Self, StoreError> {
        let projects = store.load()?;
        tracing::info!(count = projects.len(), "project registry opened");
        Ok(Self::with_projects(store, projects))
    }

    // Starts from a known list without reading the store
    pub fn with_projects(store: Box<dyn ProjectStore>, projects: Vec<Project>) -> Self {
        Self {
            projects,
            store,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, project_id: &str) -> Option<Project> {
        self.projects.iter().find(|p| p.id == project_id).cloned()
    }

    pub fn create(
        &mut self,
        title: impl Into<String>,
        client_name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Applied<Project> {
        let mut project = Project::new(title.into(), client_name.into(), image_url.into());
        while self.projects.iter().any(|p| p.id == project.id) {
            project.id = Uuid::new_v4().to_string();
        }

        tracing::info!(project_id = %project.id, title = %project.title, "project created");
        self.projects.insert(0, project.clone());
        self.commit(project)
    }

    // `None` when the id is unknown; nothing is saved then.
    pub fn request_changes(&mut self, project_id: &str) -> Option<Applied<Project>> {
        self.transition(project_id, StatusEvent::RequestChanges, None)
    }

    // A missing record keeps whatever record the project already has.
    pub fn approve(
        &mut self,
        project_id: &str,
        approval: Option<ApprovalData>,
    ) -> Option<Applied<Project>> {
        self.transition(project_id, StatusEvent::Approve, approval)
    }

    pub fn add_comment(
        &mut self,
        project_id: &str,
        author: Author,
        text: impl Into<String>,
    ) -> Result<Option<Applied<Comment>>, RegistryError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(RegistryError::EmptyComment);
        }

        let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) else {
            tracing::debug!(project_id, "comment dropped, unknown project");
            return Ok(None);
        };

        let mut comment = Comment::new(author, text);
        while project.has_comment_id(&comment.id) {
            comment.id = Uuid::new_v4().to_string();
        }
        project.comments.push(comment.clone());
        tracing::info!(project_id, comment_id = %comment.id, ?author, "comment added");

        Ok(Some(self.commit(comment)))
    }

    pub fn subscribe(&mut self, listener: impl Fn(&[Project]) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn transition(
        &mut self,
        project_id: &str,
        event: StatusEvent,
        approval: Option<ApprovalData>,
    ) -> Option<Applied<Project>> {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) else {
            tracing::debug!(project_id, ?event, "transition ignored, unknown project");
            return None;
        };

        let from = project.status;
        project.apply(event, approval);
        let updated = project.clone();
        tracing::info!(project_id, ?from, to = ?updated.status, "project status changed");

        Some(self.commit(updated))
    }

    fn commit<T>(&mut self, value: T) -> Applied<T> {
        for (_, listener) in &self.listeners {
            listener(&self.projects);
        }
        let save_error = match self.store.save(&self.projects) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!(error = %e, "failed to persist projects");
                Some(e)
            }
        };
        Applied { value, save_error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ProjectStatus;
    use crate::core::services::storage::{MemoryBackend, PersistentStore};
    use assert_matches::assert_matches;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    const KEY: &str = "approveflow_projects";

    fn empty_registry() -> (ProjectRegistry, MemoryBackend) {
        let backend = MemoryBackend::new();
        let store = PersistentStore::new(backend.clone(), KEY).with_seed(Vec::new);
        (ProjectRegistry::open(Box::new(store)).unwrap(), backend)
    }

    fn saved(backend: &MemoryBackend) -> Vec<Project> {
        serde_json::from_str(&backend.raw(KEY).unwrap()).unwrap()
    }

    struct FailingStore;

    impl ProjectStore for FailingStore {
        fn load(&self) -> Result<Vec<Project>, StoreError> {
            Ok(Vec::new())
        }

        fn save(&self, _projects: &[Project]) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: KEY.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    struct FlakyStore {
        inner: PersistentStore<MemoryBackend>,
        fail_next: Cell<bool>,
    }

    impl ProjectStore for FlakyStore {
        fn load(&self) -> Result<Vec<Project>, StoreError> {
            self.inner.load()
        }

        fn save(&self, projects: &[Project]) -> Result<(), StoreError> {
            if self.fail_next.replace(false) {
                return Err(StoreError::Write {
                    key: KEY.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.inner.save(projects)
        }
    }

    #[test]
    fn created_projects_have_distinct_ids_and_start_pending() {
        let (mut registry, _) = empty_registry();
        let mut ids = HashSet::new();

        for i in 0..50 {
            let project = registry.create(format!("P{}", i), "Client", "img://x").value;
            assert_eq!(project.status, ProjectStatus::Pending);
            assert!(project.comments.is_empty());
            assert!(ids.insert(project.id));
        }
        assert_eq!(registry.projects().len(), 50);
    }

    #[test]
    fn newest_project_comes_first() {
        let (mut registry, _) = empty_registry();
        registry.create("First", "A", "img://1");
        let second = registry.create("Second", "B", "img://2").value;

        assert_eq!(registry.projects()[0].id, second.id);
    }

    #[test]
    fn every_mutation_is_persisted() {
        let (mut registry, backend) = empty_registry();
        let project = registry.create("Logo", "Acme", "img://1").value;
        assert_eq!(saved(&backend).len(), 1);

        registry.request_changes(&project.id).unwrap();
        assert_eq!(saved(&backend)[0].status, ProjectStatus::ChangesRequested);

        registry
            .add_comment(&project.id, Author::Freelancer, "v2 uploaded")
            .unwrap();
        assert_eq!(saved(&backend)[0].comments.len(), 1);
    }

    #[test]
    fn approve_then_get_returns_the_record() {
        let (mut registry, _) = empty_registry();
        let project = registry.create("Logo", "Acme", "img://1").value;
        let record = ApprovalData {
            approved_at: 1000,
            approver_agent: "UA".to_string(),
            ip_address: "1.2.3.4".to_string(),
        };

        registry.approve(&project.id, Some(record.clone())).unwrap();
        let fetched = registry.get(&project.id).unwrap();

        assert_eq!(fetched.status, ProjectStatus::Approved);
        assert_eq!(fetched.approval_data, Some(record));
    }

    #[test]
    fn request_changes_is_idempotent_and_reopens_approved() {
        let (mut registry, _) = empty_registry();
        let project = registry.create("Logo", "Acme", "img://1").value;
        registry.approve(&project.id, None).unwrap();

        for _ in 0..3 {
            registry.request_changes(&project.id).unwrap();
            assert_eq!(
                registry.get(&project.id).unwrap().status,
                ProjectStatus::ChangesRequested
            );
        }
    }

    #[test]
    fn comments_keep_insertion_order_with_unique_ids() {
        let (mut registry, _) = empty_registry();
        let project = registry.create("Logo", "Acme", "img://1").value;

        let texts = ["first", "second", "third"];
        for (i, text) in texts.iter().enumerate() {
            let author = if i % 2 == 0 { Author::Client } else { Author::Freelancer };
            let comment = registry.add_comment(&project.id, author, *text).unwrap().unwrap().value;
            assert_eq!(comment.author, author);
            assert_eq!(comment.text, *text);
        }

        let comments = registry.get(&project.id).unwrap().comments;
        let order: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(order, texts);
        let ids: HashSet<&str> = comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn unknown_project_ids_are_silent_no_ops() {
        let (mut registry, backend) = empty_registry();

        assert!(registry.get("missing").is_none());
        assert!(registry.request_changes("missing").is_none());
        assert!(registry.approve("missing", None).is_none());
        assert_matches!(registry.add_comment("missing", Author::Client, "hello"), Ok(None));
        assert!(backend.raw(KEY).is_none());
    }

    #[test]
    fn blank_comment_is_rejected() {
        let (mut registry, _) = empty_registry();
        let project = registry.create("Logo", "Acme", "img://1").value;

        assert_matches!(
            registry.add_comment(&project.id, Author::Client, "   "),
            Err(RegistryError::EmptyComment)
        );
        assert!(registry.get(&project.id).unwrap().comments.is_empty());
    }

    #[test]
    fn subscribers_receive_each_snapshot_until_unsubscribed() {
        let (mut registry, _) = empty_registry();
        let calls = Rc::new(Cell::new(0));
        let last_len = Rc::new(RefCell::new(0));

        let id = {
            let calls = calls.clone();
            let last_len = last_len.clone();
            registry.subscribe(move |projects| {
                calls.set(calls.get() + 1);
                *last_len.borrow_mut() = projects.len();
            })
        };

        let project = registry.create("Logo", "Acme", "img://1").value;
        registry.request_changes(&project.id).unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(*last_len.borrow(), 1);

        assert!(registry.unsubscribe(id));
        registry.create("Banner", "Acme", "img://2");
        assert_eq!(calls.get(), 2);
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn failed_save_is_reported_but_memory_keeps_the_change() {
        let mut registry = ProjectRegistry::open(Box::new(FailingStore)).unwrap();

        let created = registry.create("Logo", "Acme", "img://1");
        assert!(!created.is_saved());
        assert_matches!(created.save_error, Some(StoreError::Write { .. }));
        assert_eq!(registry.projects().len(), 1);
        assert_eq!(registry.projects()[0].id, created.value.id);
    }

    #[test]
    fn failed_save_still_hands_back_the_comment() {
        let mut registry = ProjectRegistry::open(Box::new(FailingStore)).unwrap();
        let project = registry.create("Logo", "Acme", "img://1").value;

        let added = registry
            .add_comment(&project.id, Author::Freelancer, "v2 uploaded")
            .unwrap()
            .unwrap();
        assert!(!added.is_saved());
        assert_eq!(registry.get(&project.id).unwrap().comments, vec![added.value]);
    }

    #[test]
    fn saving_after_a_failed_write_does_not_duplicate_the_project() {
        let backend = MemoryBackend::new();
        let healthy = PersistentStore::new(backend.clone(), KEY).with_seed(Vec::new);
        let flaky = FlakyStore {
            inner: healthy,
            fail_next: Cell::new(true),
        };
        let mut registry = ProjectRegistry::open(Box::new(flaky)).unwrap();

        let first = registry.create("Logo", "Acme", "img://1");
        assert!(!first.is_saved());
        assert!(backend.raw(KEY).is_none());

        // The next mutation writes the whole list, including the unsaved project
        let reopened = registry.request_changes(&first.value.id).unwrap();
        assert!(reopened.is_saved());

        let persisted = saved(&backend);
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, first.value.id);
        assert_eq!(registry.projects().len(), 1);
    }
}
