pub mod action_bar;
pub mod approval_modal;
pub mod approved_screen;
pub mod comment_thread;

pub use action_bar::ActionBar;
pub use approval_modal::ApprovalModal;
pub use approved_screen::ApprovedScreen;
pub use comment_thread::{CommentInput, CommentThread};
