//! # trackside-store
//!
//! SQLite storage layer for races and sporting events.
//!
//! The read path is a small pipeline: a filter and order request become a
//! parameterized SQL statement ([`query`]), the statement is executed and
//! each row mapped into a domain record with its derived status ([`scan`]),
//! and per-resource repositories compose the two behind `list`/`get`
//! ([`repositories`]). The [`store::Store`] facade owns the storage gateway
//! ([`db::Db`]) and a clock, acquiring a fresh connection per call.
//!
//! Both resources share one generic builder/mapper pair, parameterized by a
//! per-resource [`query::ResourceTable`] descriptor — the table name, column
//! list, and orderable-column allow-list are fixed at compile time, so no
//! caller-controlled string ever reaches the SQL text.
//!
//! Schema creation and seeding ([`schema`]) exist for the binary and for
//! tests; the read path never writes.

#![deny(unsafe_code)]

pub mod db;
pub mod errors;
pub mod query;
pub mod repositories;
pub mod scan;
pub mod schema;
pub mod store;

pub use db::Db;
pub use errors::{Result, StoreError};
pub use store::Store;
