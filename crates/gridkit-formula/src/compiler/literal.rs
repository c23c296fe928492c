use super::{Formatter, ToFormula};
use crate::{expr::format_timestamp, Literal, Result};

impl ToFormula for &Literal {
    fn to_formula(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Literal::Null => fmt!(f, "BLANK()"),
            Literal::Bool(true) => fmt!(f, "TRUE()"),
            Literal::Bool(false) => fmt!(f, "FALSE()"),
            Literal::Number(number) => f.dst.push_str(&number.to_string()),
            Literal::String(value) => quoted(f, value),
            Literal::Timestamp(timestamp) => quoted(f, &format_timestamp(timestamp)),
        }
        Ok(())
    }
}

/// Double-quoted string literal with embedded quotes and backslashes
/// backslash-escaped.
fn quoted(f: &mut Formatter<'_>, value: &str) {
    f.dst.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            f.dst.push('\\');
        }
        f.dst.push(c);
    }
    f.dst.push('"');
}
