pub mod content_handler;

pub use content_handler::{generate_content, index};
