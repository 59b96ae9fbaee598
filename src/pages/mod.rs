pub mod client_view;
pub mod dashboard;

pub use client_view::ClientView;
pub use dashboard::Dashboard;
