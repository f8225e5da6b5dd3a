//! Strict JSON request decoding.
//!
//! [`StrictJson`] replaces `axum::Json` for request bodies. It enforces a
//! hard body size cap before parsing, rejects trailing content after the
//! first JSON value, and classifies every decode failure into the
//! [`JsonError`] taxonomy so clients get a precise message instead of a
//! raw parser error. Unknown-member rejection comes from the destination
//! DTOs carrying `#[serde(deny_unknown_fields)]`.
//!
//! Programmer misuse has no representable analogue here: the extractor
//! owns its destination value, so the only unrecoverable faults are
//! panics, which the router's panic-recovery layer handles outside the
//! client error taxonomy.

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::json;

/// Largest accepted request body, in bytes (1 MiB).
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Classified JSON decode failures, one client-facing message per kind.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// Malformed JSON syntax.
    #[error("body contains badly-formed JSON (at line {line} column {column})")]
    Syntax { line: usize, column: usize },

    /// Truncated JSON body.
    #[error("body contains badly-formed JSON")]
    UnexpectedEof,

    /// A known member decoded to the wrong type, or a custom field codec
    /// rejected its input. Carries serde_json's detail (which includes
    /// the line/column position) since the library does not expose the
    /// offending member name.
    #[error("body contains incorrect JSON type ({0})")]
    TypeMismatch(String),

    /// Empty (or whitespace-only) body.
    #[error("body must not be empty")]
    EmptyBody,

    /// The body contains a member not present in the destination shape.
    #[error("body contains unknown key \"{0}\"")]
    UnknownField(String),

    /// The body exceeds the configured size cap.
    #[error("body must not be larger than {0} bytes")]
    TooLarge(usize),

    /// Trailing content after the first JSON value.
    #[error("body must contain only a single JSON value")]
    MultipleValues,

    /// Any other decode failure, passed through.
    #[error("{0}")]
    Other(String),
}

impl JsonError {
    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            JsonError::Syntax { .. } | JsonError::UnexpectedEof => "BAD_JSON",
            JsonError::TypeMismatch(_) => "TYPE_MISMATCH",
            JsonError::EmptyBody => "EMPTY_BODY",
            JsonError::UnknownField(_) => "UNKNOWN_FIELD",
            JsonError::TooLarge(_) => "BODY_TOO_LARGE",
            JsonError::MultipleValues => "MULTIPLE_JSON_VALUES",
            JsonError::Other(_) => "BAD_REQUEST",
        }
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.to_string(),
            "code": self.code(),
        });

        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}

/// JSON body extractor with strict decoding semantics.
///
/// Use in handlers exactly like `axum::Json`:
///
/// ```ignore
/// pub async fn create(StrictJson(input): StrictJson<CreateMovie>) -> ... { ... }
/// ```
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|err| {
                if is_length_limit(&err) {
                    JsonError::TooLarge(MAX_BODY_BYTES)
                } else {
                    JsonError::Other(err.to_string())
                }
            })?;

        decode_strict(&bytes).map(StrictJson)
    }
}

/// Decode exactly one JSON value of type `T` from `bytes`.
///
/// Classifies failures into [`JsonError`] and rejects trailing
/// non-whitespace content after the first value.
pub fn decode_strict<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, JsonError> {
    let mut stream = serde_json::Deserializer::from_slice(bytes).into_iter::<T>();

    let value = match stream.next() {
        None => return Err(JsonError::EmptyBody),
        Some(Ok(value)) => value,
        Some(Err(err)) => return Err(classify(&err, bytes)),
    };

    // A second item, well-formed or not, means the stream held more than
    // a single JSON value.
    if stream.next().is_some() {
        return Err(JsonError::MultipleValues);
    }

    Ok(value)
}

fn classify(err: &serde_json::Error, bytes: &[u8]) -> JsonError {
    match err.classify() {
        Category::Syntax => JsonError::Syntax {
            line: err.line(),
            column: err.column(),
        },
        Category::Eof => {
            if bytes.iter().all(u8::is_ascii_whitespace) {
                JsonError::EmptyBody
            } else {
                JsonError::UnexpectedEof
            }
        }
        Category::Data => {
            // serde's unknown-member rejection only surfaces through the
            // error text, so this match is best-effort: anything that
            // drifts from the expected wording falls through to the
            // type-mismatch variant.
            let message = err.to_string();
            match unknown_field_name(&message) {
                Some(field) => JsonError::UnknownField(field),
                None => JsonError::TypeMismatch(message),
            }
        }
        Category::Io => JsonError::Other(err.to_string()),
    }
}

/// Extract the member name from serde's
/// ``unknown field `name`, expected ...`` message, if it matches.
fn unknown_field_name(message: &str) -> Option<String> {
    let rest = message.strip_prefix("unknown field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Walk an error's source chain looking for a body length-limit breach.
fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(inner) = source {
        if inner.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        source = inner.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_name_parses_serde_message() {
        let msg = "unknown field `bogus`, expected one of `title`, `year` at line 1 column 20";
        assert_eq!(unknown_field_name(msg).unwrap(), "bogus");
    }

    #[test]
    fn unknown_field_name_ignores_other_messages() {
        assert!(unknown_field_name("invalid type: integer `1`, expected a string").is_none());
    }
}
