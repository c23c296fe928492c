/// How a call is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Opcode {
    /// `NAME(arg, arg, ...)`
    Function,

    /// `lhs OP rhs`, exactly two arguments
    Operator,
}

const FUNCTIONS: &[&str] = &[
    // Logical
    "AND",
    "OR",
    "XOR",
    "NOT",
    "IF",
    "SWITCH",
    "BLANK",
    "TRUE",
    "FALSE",
    "ERROR",
    "ISERROR",
    // Text
    "CONCATENATE",
    "ENCODE_URL_COMPONENT",
    "FIND",
    "LEFT",
    "LEN",
    "LOWER",
    "MID",
    "REGEX_EXTRACT",
    "REGEX_MATCH",
    "REGEX_REPLACE",
    "REPLACE",
    "REPT",
    "RIGHT",
    "SEARCH",
    "SUBSTITUTE",
    "T",
    "TRIM",
    "UPPER",
    // Numeric
    "ABS",
    "AVERAGE",
    "CEILING",
    "COUNT",
    "COUNTA",
    "COUNTALL",
    "EVEN",
    "EXP",
    "FLOOR",
    "INT",
    "LOG",
    "MAX",
    "MIN",
    "MOD",
    "ODD",
    "POWER",
    "ROUND",
    "ROUNDDOWN",
    "ROUNDUP",
    "SQRT",
    "SUM",
    "VALUE",
    // Date and time
    "CREATED_TIME",
    "DATEADD",
    "DATESTR",
    "DATETIME_DIFF",
    "DATETIME_FORMAT",
    "DATETIME_PARSE",
    "DAY",
    "FROMNOW",
    "HOUR",
    "IS_AFTER",
    "IS_BEFORE",
    "IS_SAME",
    "LAST_MODIFIED_TIME",
    "MINUTE",
    "MONTH",
    "NOW",
    "SECOND",
    "SET_LOCALE",
    "SET_TIMEZONE",
    "TIMESTR",
    "TODAY",
    "TONOW",
    "WEEKDAY",
    "WEEKNUM",
    "WORKDAY",
    "WORKDAY_DIFF",
    "YEAR",
    // Arrays
    "ARRAYCOMPACT",
    "ARRAYFLATTEN",
    "ARRAYJOIN",
    "ARRAYSLICE",
    "ARRAYUNIQUE",
    // Record
    "RECORD_ID",
];

/// `&` is part of the operator set, but the filter endpoint rejects it.
/// Concatenation in a filter has to go through `CONCATENATE(...)`.
const OPERATORS: &[&str] = &["=", "!=", ">", ">=", "<", "<=", "+", "-", "*", "/", "&"];

/// Classifies an opcode. `None` means it is unknown.
pub(crate) fn classify(opcode: &str) -> Option<Opcode> {
    if FUNCTIONS.contains(&opcode) {
        Some(Opcode::Function)
    } else if OPERATORS.contains(&opcode) {
        Some(Opcode::Operator)
    } else {
        None
    }
}
