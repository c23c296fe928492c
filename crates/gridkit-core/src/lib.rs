pub mod convert;
pub use convert::Converter;

mod error;
pub use error::{ApiError, Error, FormulaErrorKind, IntoError, RecordConversionError};

pub mod record;
pub use record::{FieldInput, Record, UnexpectedFieldPolicy, WriteMode};

pub mod schema;
pub use schema::{FieldKind, FieldOptions, FieldSchema, SelectChoice};

pub mod transport;
pub use transport::{Method, Transport};

mod value;
pub use value::Value;

/// A Result type alias that uses gridkit's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;

/// The JSON representation exchanged with the remote API.
pub type Json = serde_json::Value;

/// A JSON object keyed by field id, as sent to and received from the API.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
