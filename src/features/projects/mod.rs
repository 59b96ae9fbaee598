pub mod components;
pub mod format;
pub mod hooks;
pub mod services;

pub use components::*;
pub use hooks::*;
pub use services::*;
