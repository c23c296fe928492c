use crate::{Json, JsonMap};

use chrono::{DateTime, NaiveDate, Utc};

/// A domain value, as handed to and returned from the marshalling layer.
///
/// Structured cell contents the remote API owns the shape of (attachments,
/// collaborators, barcodes, button payloads) are kept as raw JSON objects.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Calendar date without a time component
    Date(NaiveDate),

    /// Instant in UTC
    DateTime(DateTime<Utc>),

    /// A list of values
    List(Vec<Value>),

    /// A JSON object, passed through as-is
    Object(JsonMap),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn empty_list() -> Self {
        Self::List(vec![])
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            Self::I64(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_list(&self) -> &[Value] {
        match self {
            Self::List(items) => items,
            _ => panic!("expected list, but was {self:?}"),
        }
    }

    /// Lifts an arbitrary JSON value into a domain value without
    /// interpreting it. Strings stay strings, even when they look like dates.
    pub fn from_json(json: &Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Bool(*v),
            Json::Number(n) => Self::from_number(n),
            Json::String(v) => Self::String(v.clone()),
            Json::Array(items) => Self::List(items.iter().map(Self::from_json).collect()),
            Json::Object(map) => Self::Object(map.clone()),
        }
    }

    pub(crate) fn from_number(n: &serde_json::Number) -> Self {
        match n.as_i64() {
            Some(v) => Self::I64(v),
            // u64 values above i64::MAX and floats both land here
            None => Self::F64(n.as_f64().unwrap_or(f64::NAN)),
        }
    }

    /// Renders the value as JSON. Dates use `YYYY-MM-DD`, instants use
    /// RFC 3339 with millisecond precision in UTC. Non-finite floats become
    /// `null`, since JSON cannot carry them.
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Bool(v) => Json::Bool(*v),
            Self::I64(v) => Json::from(*v),
            Self::F64(v) => serde_json::Number::from_f64(*v)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Self::String(v) => Json::String(v.clone()),
            Self::Date(v) => Json::String(format_date(v)),
            Self::DateTime(v) => Json::String(format_datetime(v)),
            Self::List(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(map) => Json::Object(map.clone()),
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

pub(crate) fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::Date(src)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Self {
        Self::DateTime(src)
    }
}

impl From<JsonMap> for Value {
    fn from(src: JsonMap) -> Self {
        Self::Object(src)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn json_numbers_keep_integer_and_float_apart() {
        assert_eq!(Value::from_json(&json!(5)), Value::I64(5));
        assert_eq!(Value::from_json(&json!(5.0)), Value::F64(5.0));
        assert_eq!(Value::from_json(&json!(0.25)), Value::F64(0.25));
    }

    #[test]
    fn temporal_values_render_as_strings() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Value::from(date).to_json(), json!("2024-02-29"));

        let instant = Utc.with_ymd_and_hms(2024, 2, 29, 13, 5, 0).unwrap();
        assert_eq!(
            Value::from(instant).to_json(),
            json!("2024-02-29T13:05:00.000Z")
        );
    }

    #[test]
    fn non_finite_float_renders_null() {
        assert_eq!(Value::F64(f64::NAN).to_json(), Json::Null);
    }

    #[test]
    fn nested_json_lifts_recursively() {
        let value = Value::from_json(&json!(["a", {"id": "usr1"}, null]));
        let items = value.expect_list();
        assert_eq!(items[0], Value::from("a"));
        assert!(items[1].as_object().is_some());
        assert!(items[2].is_null());
    }
}
