use super::Error;
use crate::FieldSchema;

/// Error raised while compiling a formula expression.
#[derive(Debug)]
pub(super) struct FormulaError {
    kind: FormulaErrorKind,
}

/// The reason a formula expression failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaErrorKind {
    /// A field reference matched neither a field name nor a field id.
    UnresolvedField {
        reference: String,
        known_names: Vec<String>,
    },

    /// A binary operator was called with other than two arguments.
    Arity { opcode: String, actual: usize },

    /// The opcode is neither a known function nor a known operator.
    UnknownOpcode { opcode: String },
}

impl std::error::Error for FormulaError {}

impl core::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            FormulaErrorKind::UnresolvedField {
                reference,
                known_names,
            } => write!(
                f,
                "unresolved field reference `{}`; known fields: {}",
                reference,
                known_names.join(", ")
            ),
            FormulaErrorKind::Arity { opcode, actual } => write!(
                f,
                "operator `{}` takes exactly 2 arguments, got {}",
                opcode, actual
            ),
            FormulaErrorKind::UnknownOpcode { opcode } => {
                write!(f, "unknown formula opcode `{}`", opcode)
            }
        }
    }
}

impl Error {
    /// Creates an error for a field reference that resolves to no field.
    pub fn unresolved_field_ref(reference: impl Into<String>, fields: &[FieldSchema]) -> Error {
        Error::formula(FormulaErrorKind::UnresolvedField {
            reference: reference.into(),
            known_names: fields.iter().map(|field| field.name.clone()).collect(),
        })
    }

    /// Creates an error for a binary operator called with the wrong number of
    /// arguments.
    pub fn operator_arity(opcode: impl Into<String>, actual: usize) -> Error {
        Error::formula(FormulaErrorKind::Arity {
            opcode: opcode.into(),
            actual,
        })
    }

    /// Creates an error for an opcode that is neither a function nor an
    /// operator.
    pub fn unknown_opcode(opcode: impl Into<String>) -> Error {
        Error::formula(FormulaErrorKind::UnknownOpcode {
            opcode: opcode.into(),
        })
    }

    fn formula(kind: FormulaErrorKind) -> Error {
        Error::from(super::ErrorKind::Formula(FormulaError { kind }))
    }

    /// Returns `true` if this error is a formula compilation error.
    pub fn is_formula(&self) -> bool {
        self.as_formula().is_some()
    }

    pub fn as_formula(&self) -> Option<&FormulaErrorKind> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::Formula(err) => Some(&err.kind),
            _ => None,
        })
    }
}
