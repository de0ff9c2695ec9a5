//! Derive macros for pgbind
//!
//! Provides `#[derive(ToSqlValue)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod to_sql_value;

/// Derive `ToSqlValue` for a newtype or a unit-only enum.
///
/// # Example
///
/// ```ignore
/// use pgbind::ToSqlValue;
///
/// #[derive(ToSqlValue)]
/// struct Email(String);
///
/// #[derive(ToSqlValue)]
/// enum Status {
///     Active,          // 'active'
///     PendingReview,   // 'pending_review'
///     #[sql(rename = "off")]
///     Disabled,        // 'off'
/// }
///
/// #[derive(ToSqlValue)]
/// #[sql(display)]
/// struct Version { major: u32, minor: u32 } // via `Display`
/// ```
///
/// # Attributes
///
/// - `#[sql(display)]` - Bind the `Display` output as text
/// - `#[sql(rename = "name")]` - Text bound for an enum variant (default: snake_case)
#[proc_macro_derive(ToSqlValue, attributes(sql))]
pub fn derive_to_sql_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    to_sql_value::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
