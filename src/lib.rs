//! ApproveFlow: share a visual asset with a client and collect an approval
//! or change requests in a comment thread. Runs entirely in the browser.

pub mod app;
pub mod core;
pub mod features;
pub mod pages;

pub use app::App;
