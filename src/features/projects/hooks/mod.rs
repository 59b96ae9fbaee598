pub mod use_projects;

pub use use_projects::*;
