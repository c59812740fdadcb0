use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::prompts::{render_prompt, template_for},
    errors::{AppError, AppResult},
    models::domain::GeneratedContent,
    models::dto::GenerateContentRequest,
    parsing::parse_content,
    services::model_service::ModelClient,
};

/// Orchestrates one generation request: validate, render the prompt, call
/// the model, and parse the reply into a structured record.
pub struct ContentService {
    model: Arc<dyn ModelClient>,
}

impl ContentService {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    pub async fn generate(&self, request: GenerateContentRequest) -> AppResult<GeneratedContent> {
        request.validate()?;

        let kind = request.content_type;
        log::info!(
            "Generating '{}' content for topic '{}'",
            kind.as_str(),
            request.topic
        );

        let prompt = render_prompt(template_for(kind), &request.topic, request.context.as_deref());
        let raw_output = self.model.generate(&prompt).await?;

        match parse_content(kind, &raw_output) {
            Ok(content) => {
                log::info!("Successfully parsed '{}' content", kind.as_str());
                Ok(content)
            }
            Err(err) => {
                // Full diagnostics stay server-side; the client only learns
                // which content type could not be produced.
                log::error!("Parsing failed for '{}': {}", kind.as_str(), err);
                log::error!("Raw output snippet: {}", snippet(&raw_output));
                Err(AppError::ParseFailed(kind.as_str().to_string()))
            }
        }
    }
}

fn snippet(raw: &str) -> String {
    raw.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::ContentKind;
    use crate::services::model_service::MockModelClient;
    use crate::test_utils::fixtures;

    fn request(content_type: ContentKind) -> GenerateContentRequest {
        GenerateContentRequest {
            topic: "European Capitals".to_string(),
            content_type,
            context: None,
        }
    }

    fn service_returning(raw: &str) -> ContentService {
        let raw = raw.to_string();
        let mut mock = MockModelClient::new();
        mock.expect_generate()
            .returning(move |_| Ok(raw.clone()));
        ContentService::new(Arc::new(mock))
    }

    #[actix_web::test]
    async fn generates_paragraph_from_model_output() {
        let service = service_returning("  Photosynthesis converts light into energy.  ");
        let content = service
            .generate(request(ContentKind::Paragraph))
            .await
            .expect("paragraph should parse");

        match content {
            GeneratedContent::Paragraph(record) => {
                assert_eq!(record.content, "Photosynthesis converts light into energy.");
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn generates_quiz_from_model_output() {
        let service = service_returning(fixtures::WELL_FORMED_QUIZ);
        let content = service
            .generate(request(ContentKind::Quiz))
            .await
            .expect("quiz should parse");

        match content {
            GeneratedContent::Quiz(record) => assert_eq!(record.questions.len(), 3),
            other => panic!("expected quiz, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn prompt_contains_topic_and_default_context() {
        let mut mock = MockModelClient::new();
        mock.expect_generate()
            .withf(|prompt: &str| {
                prompt.contains("\"European Capitals\"") && prompt.contains("None provided.")
            })
            .returning(|_| Ok("An informative paragraph.".to_string()));

        let service = ContentService::new(Arc::new(mock));
        service
            .generate(request(ContentKind::Paragraph))
            .await
            .expect("generation should succeed");
    }

    #[actix_web::test]
    async fn unparseable_output_maps_to_parse_failed() {
        let service = service_returning("Sorry, I cannot produce a quiz right now.");
        let err = service
            .generate(request(ContentKind::Quiz))
            .await
            .expect_err("quiz parse should fail");

        assert!(matches!(err, AppError::ParseFailed(kind) if kind == "quiz"));
    }

    #[actix_web::test]
    async fn model_failure_propagates_unchanged() {
        let mut mock = MockModelClient::new();
        mock.expect_generate()
            .returning(|_| Err(AppError::ModelUnavailable("timeout".to_string())));

        let service = ContentService::new(Arc::new(mock));
        let err = service
            .generate(request(ContentKind::Paragraph))
            .await
            .expect_err("model failure should propagate");

        assert!(matches!(err, AppError::ModelUnavailable(_)));
    }

    #[actix_web::test]
    async fn invalid_request_is_rejected_before_the_model_is_called() {
        let mock = MockModelClient::new();
        let service = ContentService::new(Arc::new(mock));

        let err = service
            .generate(GenerateContentRequest {
                topic: "".to_string(),
                content_type: ContentKind::Paragraph,
                context: None,
            })
            .await
            .expect_err("empty topic should fail validation");

        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
