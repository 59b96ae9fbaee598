use chrono::Utc;
use leptos::prelude::*;

use crate::core::models::{ApprovalData, Author, Comment, Project};
use crate::core::services::browser::{self, PLACEHOLDER_IP};
use crate::core::services::Applied;
use crate::features::projects::hooks::RegistryContext;

// Registry calls from the views. The change is on screen once the registry
// returns, so a failed save is only logged and the caller carries on.

fn logged<T>(applied: Applied<T>, action: &str) -> T {
    if let Some(e) = &applied.save_error {
        tracing::warn!(action, error = %e, "change kept in memory but not saved");
    }
    applied.value
}

pub fn create_project(
    ctx: RegistryContext,
    title: String,
    client_name: String,
    image_url: String,
) -> Option<Project> {
    ctx.registry
        .try_update_value(|r| r.create(title, client_name, image_url))
        .map(|applied| logged(applied, "create project"))
}

pub fn request_changes(ctx: RegistryContext, project_id: String) {
    if let Some(applied) = ctx
        .registry
        .try_update_value(|r| r.request_changes(&project_id))
        .flatten()
    {
        logged(applied, "request changes");
    }
}

// Approval as recorded from this browser
pub fn approval_record() -> ApprovalData {
    ApprovalData {
        approved_at: Utc::now().timestamp_millis(),
        approver_agent: browser::user_agent(),
        ip_address: PLACEHOLDER_IP.to_string(),
    }
}

pub fn approve_project(ctx: RegistryContext, project_id: String) {
    let record = approval_record();
    if let Some(applied) = ctx
        .registry
        .try_update_value(|r| r.approve(&project_id, Some(record)))
        .flatten()
    {
        logged(applied, "approve");
    }
}

pub fn add_comment(
    ctx: RegistryContext,
    project_id: String,
    author: Author,
    text: String,
) -> Option<Comment> {
    match ctx
        .registry
        .try_update_value(|r| r.add_comment(&project_id, author, text))?
    {
        Ok(applied) => applied.map(|applied| logged(applied, "add comment")),
        Err(e) => {
            tracing::warn!(project_id, error = %e, "comment rejected");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::StoreError;
    use crate::core::services::{ProjectRegistry, ProjectStore};
    use crate::features::projects::hooks::provide_registry;
    use leptos::reactive::owner::Owner;

    struct ReadOnlyStore;

    impl ProjectStore for ReadOnlyStore {
        fn load(&self) -> Result<Vec<Project>, StoreError> {
            Ok(Vec::new())
        }

        fn save(&self, _projects: &[Project]) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: "approveflow_projects".to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn unsaved_changes_still_complete_the_user_action() {
        let owner = Owner::new();
        owner.with(|| {
            let registry = ProjectRegistry::with_projects(Box::new(ReadOnlyStore), Vec::new());
            let ctx = provide_registry(registry);

            let project = create_project(
                ctx,
                "Logo".to_string(),
                "Acme".to_string(),
                "img://1".to_string(),
            )
            .expect("project is handed back");
            assert_eq!(ctx.projects.get_untracked().len(), 1);

            let comment = add_comment(ctx, project.id.clone(), Author::Client, "hi".to_string());
            assert!(comment.is_some());
            assert_eq!(ctx.projects.get_untracked()[0].comments.len(), 1);
        });
    }

    #[test]
    fn blank_comment_is_not_added() {
        let owner = Owner::new();
        owner.with(|| {
            let registry = ProjectRegistry::with_projects(Box::new(ReadOnlyStore), Vec::new());
            let ctx = provide_registry(registry);
            let project = create_project(
                ctx,
                "Logo".to_string(),
                "Acme".to_string(),
                "img://1".to_string(),
            )
            .unwrap();

            assert!(add_comment(ctx, project.id, Author::Client, "  ".to_string()).is_none());
        });
    }
}
