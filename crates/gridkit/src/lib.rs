//! Typed access to the records of one table in a remote tabular database.
//!
//! A [`Table`] marshals caller values to and from the API's JSON wire format
//! using the table's field schema, splits bulk writes into requests the API
//! accepts, and follows pagination cursors on reads. Filters are written as
//! [`Expr`] trees and compiled to the API's formula language.
//!
//! ```no_run
//! # async fn example(table: gridkit::Table) -> gridkit::Result<()> {
//! use gridkit::{Expr, FieldInput, ListQuery};
//!
//! table
//!     .create(vec![FieldInput::new().set("Name", "Write docs").set("Priority", 2)])
//!     .await?;
//!
//! let open = table
//!     .list(&ListQuery::new().filter(Expr::not(Expr::field("Done"))))
//!     .await?;
//! println!("{} open tasks", open.len());
//! # Ok(())
//! # }
//! ```

pub mod batch;

pub mod paginate;
pub use paginate::Page;

mod query;
pub use query::{CellFormat, Direction, ListQuery, Sort};

mod table;
pub use table::{Builder, DeletedRecord, RecordUpdate, Table, UpdateOptions, UpsertResult};

mod wire;

pub use gridkit_core::{
    async_trait, Error, FieldInput, FieldKind, FieldSchema, Json, JsonMap, Method, Record,
    Result, SelectChoice, Transport, UnexpectedFieldPolicy, Value,
};
pub use gridkit_formula::{compile, Expr};
