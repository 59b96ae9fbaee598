use chrono::Utc;

use crate::core::models::{ApprovalData, Author, Comment, Project, ProjectStatus};

// Sample projects shown on a first visit, before anything has been saved.
pub fn seed_projects() -> Vec<Project> {
    let now = Utc::now().timestamp_millis();

    vec![
        Project {
            id: "p1".to_string(),
            title: "Neon Brand Identity".to_string(),
            client_name: "Nexus Tech".to_string(),
            created_at: now - 10_000_000,
            status: ProjectStatus::ChangesRequested,
            image_url: "https://picsum.photos/800/600".to_string(),
            comments: vec![
                Comment {
                    id: "c1".to_string(),
                    author: Author::Client,
                    text: "Can we make the blue a bit more electric?".to_string(),
                    timestamp: now - 500_000,
                    x: None,
                    y: None,
                },
                Comment {
                    id: "c2".to_string(),
                    author: Author::Freelancer,
                    text: "Sure, I will update that in the next version.".to_string(),
                    timestamp: now - 200_000,
                    x: None,
                    y: None,
                },
            ],
            approval_data: None,
        },
        Project {
            id: "p2".to_string(),
            title: "Q3 Marketing Video".to_string(),
            client_name: "Apex Corp".to_string(),
            created_at: now - 2_000_000,
            status: ProjectStatus::Approved,
            image_url: "https://picsum.photos/800/450".to_string(),
            comments: Vec::new(),
            approval_data: Some(ApprovalData {
                approved_at: now,
                approver_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)".to_string(),
                ip_address: "192.168.1.1".to_string(),
            }),
        },
    ]
}
