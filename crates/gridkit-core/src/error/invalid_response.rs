use super::Error;

/// Error when a response does not have the expected wire shape.
#[derive(Debug)]
pub(super) struct InvalidResponse {
    message: Box<str>,
}

impl std::error::Error for InvalidResponse {}

impl core::fmt::Display for InvalidResponse {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid response: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResponse(InvalidResponse {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid response error.
    pub fn is_invalid_response(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidResponse(_)))
    }
}
