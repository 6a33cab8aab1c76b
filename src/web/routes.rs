use actix_cors::Cors;
use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest};
use log::debug;

use crate::error::{FieldError, ProxyError};
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error),
    )
    .route("/test", web::get().to(handlers::health_check))
    .route("/chat", web::post().to(handlers::chat));
}

/// Any origin, method and header, credentials allowed.
pub fn cors() -> Cors {
    Cors::permissive()
}

// Body errors surface as 422 before the handler runs; oversized bodies keep their 413.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected chat body: {}", err);
    if matches!(
        err,
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. }
    ) {
        return err.into();
    }
    let kind = match &err {
        JsonPayloadError::ContentType => "content_type",
        JsonPayloadError::Deserialize(e) if e.is_data() => "type_error",
        JsonPayloadError::Deserialize(_) => "json_invalid",
        _ => "payload_error",
    };
    ProxyError::Validation(vec![FieldError::new(&["body"], err.to_string(), kind)]).into()
}
