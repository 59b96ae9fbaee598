pub mod comment;
pub mod project;
pub mod status;

pub use comment::{Author, Comment};
pub use project::{ApprovalData, Project};
pub use status::{ProjectStatus, StatusEvent};
