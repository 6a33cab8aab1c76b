use actix_web::http::header::HeaderMap;
use log::debug;

pub const OPENROUTER_KEY_HEADER: &str = "x-openrouter-key";

/// Token following a case-insensitive `Bearer ` prefix.
pub fn bearer_token(authorization: &str) -> Option<&str> {
    let prefix = authorization.get(..7)?;
    if !prefix.eq_ignore_ascii_case("bearer ") {
        return None;
    }
    authorization
        .split_once(' ')
        .map(|(_, token)| token.trim())
}

/// First non-empty key wins: request body, server environment, custom header, bearer header.
pub fn resolve_api_key(
    body_key: Option<&str>,
    env_key: Option<&str>,
    custom_header: Option<&str>,
    authorization: Option<&str>,
) -> Option<String> {
    [
        body_key,
        env_key,
        custom_header,
        authorization.and_then(bearer_token),
    ]
    .into_iter()
    .flatten()
    .find(|key| !key.is_empty())
    .map(str::to_string)
}

/// Values that are not visible ASCII count as absent, so resolution moves on to the next source.
pub fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let value = headers.get(name)?;
    match value.to_str() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("Ignoring non-ASCII {} header", name);
            None
        }
    }
}
