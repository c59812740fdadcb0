use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub model_api_key: SecretString,
    pub model_api_base: Option<String>,
    pub model_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            model_api_key: SecretString::from(
                env::var("MODEL_API_KEY").unwrap_or_else(|_| "dev_api_key_unset".to_string()),
            ),
            model_api_base: env::var("MODEL_API_BASE").ok(),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the model API key is still the default placeholder
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.model_api_key.expose_secret() == "dev_api_key_unset" {
            panic!(
                "FATAL: MODEL_API_KEY is not set! The service cannot reach the generative model without it."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            model_api_key: SecretString::from("test_api_key".to_string()),
            model_api_base: None,
            model_name: "test-model".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
