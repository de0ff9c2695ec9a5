//! # pgbind
//!
//! Render PostgreSQL statements from templates with named `:placeholders`.
//!
//! ## Features
//!
//! - **Named placeholders**: `:name` tokens are found outside comments and quoted text
//! - **Inline literals**: values are escaped and written into the SQL text
//! - **Template cache**: scan a template once, render it from any number of threads
//! - **JSON-path mode**: render `"text"` / `null` for `jsonb_path_*` arguments
//! - **Derive**: `#[derive(ToSqlValue)]` for newtypes and unit enums
//!
//! ## Example
//!
//! ```
//! use pgbind::Binder;
//!
//! let mut binder = Binder::cached(
//!     "users.by_status",
//!     "SELECT id FROM users WHERE status = :status -- :ignored
//!      AND created_at::date >= :since",
//! );
//! binder
//!     .bind("status", "active")?
//!     .bind("since", chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())?;
//!
//! assert_eq!(
//!     binder.render()?,
//!     "SELECT id FROM users WHERE status = E'active' -- :ignored
//!      AND created_at::date >= '2024-01-31'",
//! );
//! # Ok::<(), pgbind::BindError>(())
//! ```
//!
//! The rendered text is meant for statements that cannot take bind parameters
//! (DDL, `COPY`, diagnostics). Prefer server-side parameters when you can.

extern crate self as pgbind;

pub mod binder;
pub mod cache;
pub mod error;
pub mod literal;
pub mod options;
pub mod prelude;
pub mod template;
pub mod zero;

mod macros;
mod trace;

pub use binder::{Binder, bind, bind_one};
pub use cache::TemplateCache;
pub use error::{BindError, BindResult};
pub use literal::{
    Displayed, Json, Literal, MAX_INTERVAL, RawJson, SqlValue, TIMESTAMP_FORMAT, ToSqlValue,
    encode, encode_value, to_json_path, to_sql,
};
pub use options::{BindOptions, LiteralMode};
pub use template::{Occurrence, PLACEHOLDER_MARKER, Parser};
pub use trace::MAX_LOGGED_SQL_LENGTH;
pub use zero::{ZeroValue, null_if_zero};

#[cfg(feature = "derive")]
pub use pgbind_derive::ToSqlValue;
