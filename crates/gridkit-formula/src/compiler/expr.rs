use super::{field::FieldRef, Comma, Formatter, ToFormula};
use crate::{
    op::{self, Opcode},
    Expr, ExprCall, Result,
};

use gridkit_core::Error;

impl ToFormula for &Expr {
    fn to_formula(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Expr::Literal(literal) => literal.to_formula(f),
            Expr::Field(name_or_id) => FieldRef(name_or_id).to_formula(f),
            Expr::Call(call) => call.to_formula(f),
        }
    }
}

impl ToFormula for &ExprCall {
    fn to_formula(self, f: &mut Formatter<'_>) -> Result<()> {
        let opcode = self.opcode.as_str();

        match op::classify(opcode) {
            Some(Opcode::Function) => {
                fmt!(f, opcode, "(", Comma(&self.args), ")");
            }
            Some(Opcode::Operator) => {
                let [lhs, rhs] = &self.args[..] else {
                    return Err(Error::operator_arity(opcode, self.args.len()));
                };

                fmt!(f, Operand(lhs), " ", opcode, " ", Operand(rhs));
            }
            None => return Err(Error::unknown_opcode(opcode)),
        }

        Ok(())
    }
}

/// An operator argument. Nested operator applications are parenthesized so
/// the tree's grouping survives the language's precedence rules.
struct Operand<'a>(&'a Expr);

impl ToFormula for Operand<'_> {
    fn to_formula(self, f: &mut Formatter<'_>) -> Result<()> {
        let nested_operator = self
            .0
            .as_call()
            .is_some_and(|call| op::classify(&call.opcode) == Some(Opcode::Operator));

        if nested_operator {
            fmt!(f, "(", self.0, ")");
        } else {
            self.0.to_formula(f)?;
        }

        Ok(())
    }
}
