use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;

use crate::error::ProxyError;
use crate::upstream::{build_payload, extract_reply};
use crate::web::auth::{header_str, resolve_api_key, OPENROUTER_KEY_HEADER};
use crate::web::models::{ChatRequest, ChatResponse};
use crate::AppState;

// Liveness check
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat proxy endpoint
pub async fn chat(
    data: web::Data<AppState>,
    http: HttpRequest,
    req: web::Json<ChatRequest>,
) -> Result<web::Json<ChatResponse>, ProxyError> {
    let req = req.into_inner();
    req.validate()?;

    let headers = http.headers();
    let api_key = resolve_api_key(
        req.api_key.as_deref(),
        data.config.openrouter_api_key.as_deref(),
        header_str(headers, OPENROUTER_KEY_HEADER),
        header_str(headers, AUTHORIZATION.as_str()),
    )
    .ok_or(ProxyError::MissingCredential)?;

    info!(
        "Chat request for model {} with {} messages",
        req.model,
        req.messages.len()
    );

    let payload = build_payload(&req);
    let body = data.upstream.complete(&api_key, &payload).await?;

    let response = extract_reply(&body, &req.model)
        .inspect_err(|_| error!("Unexpected OpenRouter response shape"))?;

    info!("Reply length: {} characters", response.reply.len());
    Ok(web::Json(response))
}
