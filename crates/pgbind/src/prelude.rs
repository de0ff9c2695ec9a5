//! Convenient imports for typical `pgbind` usage.
//!
//! ```ignore
//! use pgbind::prelude::*;
//! ```

pub use crate::{
    BindError, BindOptions, BindResult, Binder, Json, RawJson, SqlValue, TemplateCache,
    ToSqlValue, bind, bind_one, null_if_zero, params,
};
