mod adhoc;
mod api;
mod formula;
mod invalid_response;
mod missing_required_value;
mod not_readable;
mod not_writable;
mod record_conversion;
mod transport;
mod unexpected_field;
mod unknown_field;
mod value_shape;

use adhoc::AdhocError;
use formula::FormulaError;
use invalid_response::InvalidResponse;
use missing_required_value::MissingRequiredValue;
use not_readable::NotReadable;
use not_writable::NotWritable;
use std::sync::Arc;
use transport::TransportError;
use unexpected_field::UnexpectedField;
use unknown_field::UnknownField;
use value_shape::ValueShape;

pub use api::ApiError;
pub use formula::FormulaErrorKind;
pub use record_conversion::RecordConversionError;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in gridkit.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps this error in `consequent`, which is shown first when the error
    /// is displayed.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        // A shared consequent cannot be taken apart, so only its message is kept.
        let (kind, cause) = match consequent.inner.map(Arc::try_unwrap) {
            Some(Ok(inner)) => (inner.kind, inner.cause),
            Some(Err(shared)) => (
                ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
                shared.cause.clone(),
            ),
            None => (ErrorKind::Unknown, None),
        };

        // The consequent's own chain sits between it and this error.
        let cause = match cause {
            Some(existing) => self.context_impl(existing),
            None => self,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(cause),
            })),
        }
    }

    /// This error followed by each of its causes, outermost first.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        core::iter::successors(Some(self), |err| err.inner.as_ref()?.cause.as_ref())
    }

    fn kind(&self) -> &ErrorKind {
        match &self.inner {
            Some(inner) => &inner.kind,
            None => &ErrorKind::Unknown,
        }
    }

    /// Walks the context chain looking for the first error matching `f`.
    fn find_kind<T: ?Sized>(&self, f: impl Fn(&ErrorKind) -> Option<&T>) -> Option<&T> {
        self.chain().find_map(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Transport(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            core::fmt::Display::fmt(err.kind(), f)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    /// `{:?}` prints the message; `{:#?}` lists every kind in the chain.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_list()
                .entries(self.chain().map(Error::kind))
                .finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Anyhow(anyhow::Error),
    Api(ApiError),
    Formula(FormulaError),
    InvalidResponse(InvalidResponse),
    MissingRequiredValue(MissingRequiredValue),
    NotReadable(NotReadable),
    NotWritable(NotWritable),
    RecordConversion(RecordConversionError),
    Transport(TransportError),
    UnexpectedField(UnexpectedField),
    UnknownField(UnknownField),
    ValueShape(ValueShape),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        let err: &dyn core::fmt::Display = match self {
            Adhoc(err) => err,
            Anyhow(err) => err,
            Api(err) => err,
            Formula(err) => err,
            InvalidResponse(err) => err,
            MissingRequiredValue(err) => err,
            NotReadable(err) => err,
            NotWritable(err) => err,
            RecordConversion(err) => err,
            Transport(err) => err,
            UnexpectedField(err) => err,
            UnknownField(err) => err,
            ValueShape(err) => err,
            Unknown => return f.write_str("unknown gridkit error"),
        };

        core::fmt::Display::fmt(err, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::invalid_response(err.to_string())
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
