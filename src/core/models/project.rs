use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Comment, ProjectStatus, StatusEvent};

// Attestation stored when a client approves a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalData {
    pub approved_at: i64,
    pub approver_agent: String,
    // Placeholder, nothing verifies it
    pub ip_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub client_name: String,
    pub created_at: i64,
    pub status: ProjectStatus,
    pub image_url: String,
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_data: Option<ApprovalData>,
}

impl Project {
    pub fn new(title: String, client_name: String, image_url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            client_name,
            created_at: Utc::now().timestamp_millis(),
            status: ProjectStatus::Pending,
            image_url,
            comments: Vec::new(),
            approval_data: None,
        }
    }

    // Moves the project through the status table. An approval record is
    // only ever replaced by another record, never cleared.
    pub fn apply(&mut self, event: StatusEvent, approval: Option<ApprovalData>) {
        self.status = self.status.apply(event);
        if let Some(record) = approval {
            self.approval_data = Some(record);
        }
    }

    pub fn has_comment_id(&self, id: &str) -> bool {
        self.comments.iter().any(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Author;

    fn record(at: i64) -> ApprovalData {
        ApprovalData {
            approved_at: at,
            approver_agent: "UA".to_string(),
            ip_address: "1.2.3.4".to_string(),
        }
    }

    #[test]
    fn new_project_is_pending_and_empty() {
        let project = Project::new("Logo".into(), "Acme".into(), "img://1".into());
        assert_eq!(project.status, ProjectStatus::Pending);
        assert!(project.comments.is_empty());
        assert!(project.approval_data.is_none());
    }

    #[test]
    fn reopening_keeps_the_approval_record() {
        let mut project = Project::new("Logo".into(), "Acme".into(), "img://1".into());
        project.apply(StatusEvent::Approve, Some(record(1000)));
        project.apply(StatusEvent::RequestChanges, None);

        assert_eq!(project.status, ProjectStatus::ChangesRequested);
        assert_eq!(project.approval_data, Some(record(1000)));
    }

    #[test]
    fn approving_without_record_preserves_existing_one() {
        let mut project = Project::new("Logo".into(), "Acme".into(), "img://1".into());
        project.apply(StatusEvent::Approve, Some(record(1000)));
        project.apply(StatusEvent::Approve, None);
        assert_eq!(project.approval_data, Some(record(1000)));

        project.apply(StatusEvent::Approve, Some(record(2000)));
        assert_eq!(project.approval_data, Some(record(2000)));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let mut project = Project::new("Logo".into(), "Acme".into(), "img://1".into());
        project.comments.push(Comment::new(Author::Client, "hi".into()));
        project.apply(StatusEvent::Approve, Some(record(1000)));

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["clientName"], "Acme");
        assert_eq!(value["imageUrl"], "img://1");
        assert_eq!(value["status"], "APPROVED");
        assert_eq!(value["approvalData"]["approvedAt"], 1000);
        assert_eq!(value["approvalData"]["ipAddress"], "1.2.3.4");
        assert_eq!(value["comments"][0]["author"], "client");
        assert!(value["comments"][0].get("x").is_none());
    }
}
