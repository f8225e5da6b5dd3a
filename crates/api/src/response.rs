//! Response envelope and JSON encoding.
//!
//! Every response body is wrapped in an [`Envelope`] -- a single-entry
//! JSON object mapping a label to the payload (`{"movie": {...}}`) --
//! and written through [`write_json`], never returned bare.

use axum::body::Body;
use axum::http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::Response;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{AppError, AppResult};

/// Single-entry JSON wrapper object around a response payload.
#[derive(Debug)]
pub struct Envelope<'a, T: Serialize> {
    key: &'static str,
    value: &'a T,
}

impl<'a, T: Serialize> Envelope<'a, T> {
    pub fn new(key: &'static str, value: &'a T) -> Self {
        Self { key, value }
    }
}

impl<T: Serialize> Serialize for Envelope<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}

/// Serialize `body` as pretty-printed JSON (2-space indent, trailing
/// newline for terminal readability) and build the response.
///
/// Each extra header replaces any same-named prior value. Encoding
/// failure surfaces as a generic internal error; nothing is written in
/// that case.
pub fn write_json<T: Serialize>(
    status: StatusCode,
    body: &T,
    extra_headers: impl IntoIterator<Item = (HeaderName, HeaderValue)>,
) -> AppResult<Response> {
    let mut buf = serde_json::to_vec_pretty(body)
        .map_err(|err| AppError::Internal(format!("failed to encode response body: {err}")))?;
    buf.push(b'\n');

    let mut response = Response::new(Body::from(buf));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in extra_headers {
        response.headers_mut().insert(name, value);
    }

    Ok(response)
}
