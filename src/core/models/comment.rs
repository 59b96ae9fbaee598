use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Client,
    Freelancer,
}

impl Author {
    // Label shown under a message in the client-facing thread.
    pub fn display_name(&self) -> &'static str {
        match self {
            Author::Client => "You",
            Author::Freelancer => "Designer",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: Author,
    pub text: String,
    pub timestamp: i64,
    // Pin coordinates for annotations on the asset; not used yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Comment {
    pub fn new(author: Author, text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            text,
            timestamp: Utc::now().timestamp_millis(),
            x: None,
            y: None,
        }
    }
}
