use serde::Deserialize;
use validator::Validate;

use crate::models::domain::ContentKind;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateContentRequest {
    #[validate(length(min = 1, max = 500, message = "Topic must be 1-500 characters"))]
    pub topic: String,

    pub content_type: ContentKind,

    #[validate(length(max = 2000, message = "Context must be at most 2000 characters"))]
    pub context: Option<String>,
}
