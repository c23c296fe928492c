use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;

/// A formula expression tree.
///
/// Trees are built by the caller and consumed by the compiler. The JSON form
/// accepted by `Deserialize` is the one callers of the HTTP layer tend to
/// write by hand:
///
/// * `null`, booleans, numbers and strings are literals,
/// * `{"field": "Name"}` is a field reference,
/// * `["OPCODE", arg, ...]` is a call.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant
    Literal(Literal),

    /// A reference to a field, by name or id
    Field(String),

    /// A function call or binary operator application
    Call(ExprCall),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Timestamp(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    /// Function name or operator symbol
    pub opcode: String,

    /// Arguments, in order
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn null() -> Expr {
        Expr::Literal(Literal::Null)
    }

    pub fn field(name_or_id: impl Into<String>) -> Expr {
        Expr::Field(name_or_id.into())
    }

    pub fn call(opcode: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Call(ExprCall {
            opcode: opcode.into(),
            args: args.into_iter().collect(),
        })
    }

    pub fn binary_op(
        opcode: impl Into<String>,
        lhs: impl Into<Expr>,
        rhs: impl Into<Expr>,
    ) -> Expr {
        Expr::call(opcode, [lhs.into(), rhs.into()])
    }

    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::call("AND", operands)
    }

    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::call("OR", operands)
    }

    pub fn not(expr: impl Into<Expr>) -> Expr {
        Expr::call("NOT", [expr.into()])
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op("=", lhs, rhs)
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op("!=", lhs, rhs)
    }

    pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(">", lhs, rhs)
    }

    pub fn ge(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(">=", lhs, rhs)
    }

    pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op("<", lhs, rhs)
    }

    pub fn le(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op("<=", lhs, rhs)
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Expr::Call(_))
    }

    pub fn as_call(&self) -> Option<&ExprCall> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Builds an expression from its JSON form.
    pub fn from_json(json: &Json) -> Result<Expr, String> {
        Ok(match json {
            Json::Null => Expr::null(),
            Json::Bool(v) => Expr::from(*v),
            Json::Number(v) => Expr::Literal(Literal::Number(v.clone())),
            Json::String(v) => Expr::from(v.as_str()),
            Json::Array(items) => {
                let Some((opcode, args)) = items.split_first() else {
                    return Err("call must start with an opcode".to_string());
                };
                let Json::String(opcode) = opcode else {
                    return Err(format!("call opcode must be a string, got {opcode}"));
                };
                Expr::call(
                    opcode.as_str(),
                    args.iter().map(Expr::from_json).collect::<Result<Vec<_>, _>>()?,
                )
            }
            Json::Object(map) => match (map.len(), map.get("field")) {
                (1, Some(Json::String(name_or_id))) => Expr::field(name_or_id.as_str()),
                _ => return Err(format!("expected {{\"field\": <name or id>}}, got {json}")),
            },
        })
    }

    /// Renders the expression in its JSON form.
    pub fn to_json(&self) -> Json {
        match self {
            Expr::Literal(Literal::Null) => Json::Null,
            Expr::Literal(Literal::Bool(v)) => Json::Bool(*v),
            Expr::Literal(Literal::Number(v)) => Json::Number(v.clone()),
            Expr::Literal(Literal::String(v)) => Json::String(v.clone()),
            Expr::Literal(Literal::Timestamp(v)) => Json::String(format_timestamp(v)),
            Expr::Field(name_or_id) => serde_json::json!({ "field": name_or_id }),
            Expr::Call(call) => Json::Array(
                std::iter::once(Json::String(call.opcode.clone()))
                    .chain(call.args.iter().map(Expr::to_json))
                    .collect(),
            ),
        }
    }
}

pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::Literal(value)
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Expr::Call(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Literal(Literal::Bool(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Literal(Literal::Number(value.into()))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Literal(Literal::Number(value.into()))
    }
}

impl From<f64> for Expr {
    /// Non-finite floats have no literal form and become `BLANK()`.
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(number) => Expr::Literal(Literal::Number(number)),
            None => Expr::null(),
        }
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Literal(Literal::String(value.to_string()))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Literal(Literal::String(value))
    }
}

impl From<DateTime<Utc>> for Expr {
    fn from(value: DateTime<Utc>) -> Self {
        Expr::Literal(Literal::Timestamp(value))
    }
}

impl<T> From<Option<T>> for Expr
where
    T: Into<Expr>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Expr::null(),
        }
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Expr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        Expr::from_json(&json).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_form_parses() {
        let expr: Expr =
            serde_json::from_value(json!(["AND", {"field": "Done"}, ["=", {"field": "N"}, 5]]))
                .unwrap();

        assert_eq!(
            expr,
            Expr::and([Expr::field("Done"), Expr::eq(Expr::field("N"), 5)])
        );
    }

    #[test]
    fn json_form_round_trips() {
        let json = json!(["IF", {"field": "fld1"}, "yes", null, 2.5, false]);
        let expr: Expr = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&expr).unwrap(), json);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(serde_json::from_value::<Expr>(json!([])).is_err());
        assert!(serde_json::from_value::<Expr>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<Expr>(json!({"name": "x"})).is_err());
    }
}
