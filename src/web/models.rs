use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FieldError, ProxyError};

pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> Option<f64> {
    Some(0.7)
}

fn default_top_p() -> Option<f64> {
    Some(1.0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// system, user or assistant; forwarded as given.
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: Option<f64>,
    #[serde(default = "default_top_p")]
    pub top_p: Option<f64>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Extra OpenRouter parameters merged over the outbound payload.
    #[serde(default)]
    pub extra: Option<Value>,
}

impl ChatRequest {
    /// Range checks serde cannot express. Runs before any key resolution or upstream call.
    pub fn validate(&self) -> Result<(), ProxyError> {
        let mut errors = Vec::new();
        check_range(&mut errors, "temperature", self.temperature, 2.0);
        check_range(&mut errors, "top_p", self.top_p, 1.0);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProxyError::Validation(errors))
        }
    }
}

fn check_range(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>, max: f64) {
    let Some(value) = value else {
        return;
    };
    if value < 0.0 {
        errors.push(FieldError::new(
            &["body", field],
            "Input should be greater than or equal to 0",
            "greater_than_equal",
        ));
    } else if value > max {
        errors.push(FieldError::new(
            &["body", field],
            format!("Input should be less than or equal to {max}"),
            "less_than_equal",
        ));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> ChatRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn fills_defaults() {
        let req = parse(json!({"messages": [{"role": "user", "content": "hi"}]}));
        assert_eq!(req.model, "openai/gpt-4o-mini");
        assert_eq!(req.temperature, Some(0.7));
        assert_eq!(req.top_p, Some(1.0));
        assert!(req.api_key.is_none());
        assert!(req.extra.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn explicit_null_sampling_values_are_kept() {
        let req = parse(json!({"messages": [], "temperature": null, "top_p": null}));
        assert_eq!(req.temperature, None);
        assert_eq!(req.top_p, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn accepts_range_boundaries() {
        let req = parse(json!({"messages": [], "temperature": 2, "top_p": 0}));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let req = parse(json!({"messages": [], "temperature": 2.5, "top_p": -0.1}));
        match req.validate() {
            Err(ProxyError::Validation(fields)) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].loc, vec!["body", "temperature"]);
                assert_eq!(fields[0].kind, "less_than_equal");
                assert_eq!(fields[1].loc, vec!["body", "top_p"]);
                assert_eq!(fields[1].kind, "greater_than_equal");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn messages_are_required() {
        let result: Result<ChatRequest, _> = serde_json::from_value(json!({"model": "x"}));
        assert!(result.is_err());
    }
}
