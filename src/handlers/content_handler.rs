use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::{app_state::AppState, errors::AppError, models::dto::GenerateContentRequest};

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the AI Content Generation API!"
    }))
}

#[post("/api/generate")]
async fn generate_content(
    state: web::Data<AppState>,
    request: web::Json<GenerateContentRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    log::info!(
        "Received generation request - Topic: '{}', Type: '{}'",
        request.topic,
        request.content_type.as_str()
    );

    let content = state.content_service.generate(request).await?;
    Ok(HttpResponse::Ok().json(content))
}
