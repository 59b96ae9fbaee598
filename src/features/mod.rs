pub mod client_review;
pub mod dashboard;
pub mod projects;
