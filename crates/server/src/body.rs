//! Request body and query extraction.
//!
//! Bodies arrive either as JSON objects or as urlencoded forms. Both become
//! one flat [`Fields`] map. A body that cannot be decoded is treated as
//! empty, so the handler answers with the matching domain error instead of
//! a transport-level rejection.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde_json::Value as JsonValue;
use tracing::debug;
use tracker_executor::Fields;

/// Flat request body, from JSON or a urlencoded form.
///
/// Form values are always strings. JSON values keep their JSON type. A
/// repeated form key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFields(pub Fields);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Other;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if essence == "application/json" || essence.ends_with("+json") {
        BodyKind::Json
    } else if essence == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<S> FromRequest<S> for RequestFields
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(req.headers());
        // Oversized bodies still surface as 413 from the body limit layer
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let fields = match kind {
            BodyKind::Json => parse_json(&bytes),
            BodyKind::Form => parse_form(&bytes),
            BodyKind::Other => Fields::new(),
        };
        Ok(RequestFields(fields))
    }
}

/// Decode a JSON object body. Anything else is an empty body.
pub fn parse_json(bytes: &[u8]) -> Fields {
    if bytes.is_empty() {
        return Fields::new();
    }
    match serde_json::from_slice::<JsonValue>(bytes) {
        Ok(JsonValue::Object(map)) => map,
        Ok(_) => {
            debug!("json body is not an object");
            Fields::new()
        }
        Err(e) => {
            debug!(error = %e, "json body did not parse");
            Fields::new()
        }
    }
}

/// Decode a urlencoded form body into string-valued fields.
pub fn parse_form(bytes: &[u8]) -> Fields {
    match serde_urlencoded::from_bytes::<Vec<(String, String)>>(bytes) {
        Ok(pairs) => pairs
            .into_iter()
            .map(|(k, v)| (k, JsonValue::String(v)))
            .collect(),
        Err(e) => {
            debug!(error = %e, "form body did not parse");
            Fields::new()
        }
    }
}

/// Decode a raw query string into `(name, value)` pairs, in order.
pub fn parse_query(raw: Option<&str>) -> Vec<(String, String)> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    serde_urlencoded::from_str(raw).unwrap_or_else(|e| {
        debug!(error = %e, "query string did not parse");
        Vec::new()
    })
}
