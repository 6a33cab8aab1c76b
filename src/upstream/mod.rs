use log::{debug, info, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::error::ProxyError;
use crate::web::models::{ChatRequest, ChatResponse};

/// Thin client for the OpenRouter chat-completions endpoint.
pub struct OpenRouterClient {
    url: String,
    referer: String,
    title: String,
    client: Client,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        info!("Using OpenRouter endpoint at: {}", config.upstream_url);

        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            url: config.upstream_url.clone(),
            referer: config.app_url.clone(),
            title: config.app_name.clone(),
            client,
        })
    }

    /// Sends the payload and returns the upstream JSON body.
    pub async fn complete(&self, api_key: &str, payload: &Value) -> Result<Value, ProxyError> {
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CONTENT_TYPE, "application/json")
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("OpenRouter unreachable: {}", e);
                ProxyError::UpstreamUnreachable(e)
            })?;

        let status = response.status();
        let text = response.text().await?;

        if status.as_u16() >= 400 {
            warn!("OpenRouter returned {}", status);
            let detail = serde_json::from_str(&text).unwrap_or_else(|_| json!({ "error": text }));
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!("OpenRouter sent a non-JSON body: {}", e);
            ProxyError::MalformedResponse
        })
    }
}

/// `{model, messages, temperature, top_p}` overlaid with `extra` when it is an object.
pub fn build_payload(req: &ChatRequest) -> Value {
    let mut payload = Map::new();
    payload.insert("model".into(), json!(req.model));
    payload.insert("messages".into(), json!(req.messages));
    payload.insert("temperature".into(), json!(req.temperature));
    payload.insert("top_p".into(), json!(req.top_p));

    match &req.extra {
        Some(Value::Object(extra)) => {
            for (key, value) in extra {
                payload.insert(key.clone(), value.clone());
            }
        }
        Some(other) => debug!("Ignoring non-object extra params: {}", other),
        None => {}
    }

    Value::Object(payload)
}

pub fn extract_reply(body: &Value, requested_model: &str) -> Result<ChatResponse, ProxyError> {
    let content = body
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or(ProxyError::MalformedResponse)?;

    let model = body
        .get("model")
        .and_then(Value::as_str)
        .unwrap_or(requested_model);

    Ok(ChatResponse {
        reply: content.trim().to_string(),
        model: model.to_string(),
    })
}
