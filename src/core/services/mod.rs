pub mod assistant;
pub mod browser;
pub mod gemini;
pub mod registry;
pub mod seed;
pub mod storage;

pub use assistant::*;
pub use gemini::{GeminiClient, GenerateRequest, GenerativeService, Part};
pub use registry::*;
pub use storage::*;
