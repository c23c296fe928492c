//! Compiles filter expression trees into the remote system's formula
//! language.
//!
//! ```
//! use gridkit_core::{FieldKind, FieldSchema};
//! use gridkit_formula::{compile, Expr};
//!
//! let fields = vec![
//!     FieldSchema::new("fldDone", "Done", FieldKind::Checkbox),
//!     FieldSchema::new("fldPriority", "Priority", FieldKind::Number),
//! ];
//!
//! let expr = Expr::and([Expr::field("Done"), Expr::eq(Expr::field("Priority"), 5)]);
//! assert_eq!(
//!     compile(&expr, &fields).unwrap(),
//!     "AND({fldDone}, {fldPriority} = 5)"
//! );
//! ```

pub mod compiler;
pub use compiler::{compile, Compiler};

pub mod expr;
pub use expr::{Expr, ExprCall, Literal};

mod op;

pub use gridkit_core::{Error, Result};
