use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Pending,
    ChangesRequested,
    Approved,
}

// Externally triggered events that move a project between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    RequestChanges,
    Approve,
}

impl ProjectStatus {
    // Transition table. Every event is accepted from every state; nothing
    // here guards against reopening an approved project.
    pub fn apply(self, event: StatusEvent) -> ProjectStatus {
        use ProjectStatus::*;
        use StatusEvent::*;

        match (self, event) {
            (Pending, RequestChanges) => ChangesRequested,
            (Pending, Approve) => Approved,
            (ChangesRequested, RequestChanges) => ChangesRequested,
            (ChangesRequested, Approve) => Approved,
            (Approved, RequestChanges) => ChangesRequested,
            (Approved, Approve) => Approved,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::ChangesRequested => "Changes Requested",
            ProjectStatus::Approved => "Approved",
        }
    }

    // CSS modifier used by the status badges.
    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "status-pending",
            ProjectStatus::ChangesRequested => "status-changes",
            ProjectStatus::Approved => "status-approved",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, ProjectStatus::Approved)
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![
            ProjectStatus::Pending,
            ProjectStatus::ChangesRequested,
            ProjectStatus::Approved,
        ]
    }
}
