use super::Error;
use crate::Json;

/// An `{error: ...}` envelope returned by the remote API.
///
/// The envelope comes in two shapes: `{"error": {"type": ..., "message": ...}}`
/// and the bare `{"error": "NOT_FOUND"}`. Both are accepted; the raw envelope
/// is kept for callers that need more than the type and message.
#[derive(Debug)]
pub struct ApiError {
    error_type: Box<str>,
    message: Option<Box<str>>,
    envelope: Json,
}

impl ApiError {
    /// The error type reported by the API, e.g. `INVALID_REQUEST_UNKNOWN`.
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The response body exactly as received.
    pub fn envelope(&self) -> &Json {
        &self.envelope
    }
}

impl std::error::Error for ApiError {}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "api error {}", self.error_type)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an API error from a response body carrying an `error` key.
    pub fn api(envelope: Json) -> Error {
        let (error_type, message) = match envelope.get("error") {
            Some(Json::String(error_type)) => (error_type.clone(), None),
            Some(Json::Object(error)) => (
                error
                    .get("type")
                    .and_then(Json::as_str)
                    .unwrap_or("UNKNOWN")
                    .to_string(),
                error
                    .get("message")
                    .and_then(Json::as_str)
                    .map(|message| message.into()),
            ),
            _ => ("UNKNOWN".to_string(), None),
        };

        Error::from(super::ErrorKind::Api(ApiError {
            error_type: error_type.into(),
            message,
            envelope,
        }))
    }

    /// Returns `true` if this error is an API error.
    pub fn is_api(&self) -> bool {
        self.as_api().is_some()
    }

    pub fn as_api(&self) -> Option<&ApiError> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::Api(err) => Some(err),
            _ => None,
        })
    }
}
