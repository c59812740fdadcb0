pub mod content_service;
pub mod model_service;

pub use content_service::ContentService;
pub use model_service::{ModelClient, OpenAiModelClient};
