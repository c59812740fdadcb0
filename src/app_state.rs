use std::sync::Arc;

use crate::{
    config::Config,
    services::{ContentService, ModelClient, OpenAiModelClient},
};

#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model_client = Arc::new(OpenAiModelClient::new(&config));
        Self::with_model_client(config, model_client)
    }

    /// Builds the state around any model client. This is the seam tests use
    /// to substitute a stub for the real outbound call.
    pub fn with_model_client(config: Config, model_client: Arc<dyn ModelClient>) -> Self {
        let content_service = Arc::new(ContentService::new(model_client));

        Self {
            content_service,
            config: Arc::new(config),
        }
    }
}
