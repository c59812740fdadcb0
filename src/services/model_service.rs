use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Outbound call to the generative text model. Everything behind this trait
/// is I/O; the parsers never see it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends a fully rendered prompt and returns the model's raw reply text.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Chat-completion client for OpenAI-compatible APIs.
pub struct OpenAiModelClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl OpenAiModelClient {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.model_api_key.expose_secret());
        if let Some(api_base) = &config.model_api_base {
            openai_config = openai_config.with_api_base(api_base);
        }

        Self {
            client: Client::with_config(openai_config),
            model_name: config.model_name.clone(),
        }
    }
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        log::info!("Sending request to model '{}'", self.model_name);

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build message: {}", e)))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages([ChatCompletionRequestMessage::User(message)])
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build request: {}", e)))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            log::error!("Model API call failed: {}", e);
            AppError::ModelUnavailable(e.to_string())
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                log::warn!("Model response contained no text");
                AppError::ModelUnavailable("model returned an empty response".to_string())
            })?;

        log::info!("Received {} characters from model", content.len());
        Ok(content)
    }
}
