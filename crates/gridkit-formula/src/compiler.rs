#[macro_use]
mod fmt;
use fmt::ToFormula;

mod delim;
use delim::Comma;

// Fragment compilers
mod expr;
mod field;
mod literal;

use crate::{Expr, Result};

use gridkit_core::{schema::FieldLookup, FieldSchema};

/// Compiles expressions against one table's fields.
///
/// Field references are resolved through a name-or-id table built once when
/// the compiler is created; ids win over names that collide with them.
pub struct Compiler<'a> {
    fields: FieldLookup<'a>,
}

struct Formatter<'a> {
    /// Handle to the compiler
    compiler: &'a Compiler<'a>,

    /// Where to write the formula
    dst: &'a mut String,
}

impl<'a> Compiler<'a> {
    pub fn new(fields: &'a [FieldSchema]) -> Compiler<'a> {
        Compiler {
            fields: FieldLookup::new(fields),
        }
    }

    /// Compiles an expression. No partial formula is ever returned: the
    /// first unresolved field, bad operator arity or unknown opcode fails
    /// the whole compilation.
    ///
    /// Operators render as `left OP right`. An operand that is itself an
    /// operator application is wrapped in parentheses, so
    /// `["=", ["+", {"field": "A"}, 1], 2]` compiles to `({fldA} + 1) = 2`.
    pub fn compile(&self, expr: &Expr) -> Result<String> {
        let mut ret = String::new();

        let mut f = Formatter {
            compiler: self,
            dst: &mut ret,
        };

        expr.to_formula(&mut f)?;

        tracing::trace!(formula = %ret, "compiled formula");
        Ok(ret)
    }
}

/// Compiles `expr` with field references resolved against `fields`.
pub fn compile(expr: &Expr, fields: &[FieldSchema]) -> Result<String> {
    Compiler::new(fields).compile(expr)
}
