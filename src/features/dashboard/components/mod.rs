pub mod email_drafter;
pub mod new_project_modal;
pub mod project_card;
pub mod reply_box;

pub use email_drafter::EmailDrafter;
pub use new_project_modal::NewProjectModal;
pub use project_card::ProjectCard;
pub use reply_box::ReplyBox;
