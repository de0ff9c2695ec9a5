//! Bindable values and the [`ToSqlValue`] conversion trait.

use crate::error::BindResult;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// A value ready to be rendered as a SQL literal.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// `NULL`
    Null,
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Exact numeric already formatted as decimal text (`i128`, `Decimal`, ...)
    Numeric(String),
    /// Boolean
    Bool(bool),
    /// Text; trimmed when rendered
    Text(String),
    /// Byte sequence, rendered as a `bytea` hex literal
    Bytes(Vec<u8>),
    /// Time of day / interval up to 24 hours, rendered as `HH:MM:SS`
    Interval(Duration),
    /// Timestamp with an explicit UTC offset
    Timestamp(DateTime<FixedOffset>),
    /// Calendar date
    Date(NaiveDate),
    /// UUID
    Uuid(Uuid),
    /// Pre-serialized JSON document
    Json(String),
}

impl SqlValue {
    /// Text value from a type's `Display` output.
    pub fn display(value: &(impl fmt::Display + ?Sized)) -> Self {
        Self::Text(value.to_string())
    }

    /// JSON value serialized from any `Serialize` type.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> BindResult<Self> {
        Ok(Self::Json(serde_json::to_string(value)?))
    }

    /// Check if this is `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Conversion of a Rust value into a [`SqlValue`].
///
/// Implemented for the primitive, time, UUID and JSON types. Caller-defined
/// types implement it by hand or with `#[derive(ToSqlValue)]`:
///
/// ```ignore
/// use pgbind::ToSqlValue;
///
/// #[derive(ToSqlValue)]
/// struct UserId(i64);
///
/// #[derive(ToSqlValue)]
/// enum Status {
///     Active,
///     #[sql(rename = "off")]
///     Disabled,
/// }
/// ```
pub trait ToSqlValue {
    fn to_sql_value(&self) -> BindResult<SqlValue>;
}

macro_rules! impl_to_sql_value {
    ($variant:ident: $($ty:ty => |$v:ident| $conv:expr),+ $(,)?) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(&self) -> BindResult<SqlValue> {
                    let $v = self;
                    Ok(SqlValue::$variant($conv))
                }
            }
        )+
    };
}

impl_to_sql_value!(Int:
    i8 => |v| i64::from(*v),
    i16 => |v| i64::from(*v),
    i32 => |v| i64::from(*v),
    i64 => |v| *v,
    isize => |v| *v as i64,
);

impl_to_sql_value!(UInt:
    u8 => |v| u64::from(*v),
    u16 => |v| u64::from(*v),
    u32 => |v| u64::from(*v),
    u64 => |v| *v,
    usize => |v| *v as u64,
);

impl_to_sql_value!(Numeric:
    i128 => |v| v.to_string(),
    u128 => |v| v.to_string(),
);

impl_to_sql_value!(Float:
    f64 => |v| *v,
    // Parse the shortest f32 text so 0.1f32 stays 0.1.
    f32 => |v| v.to_string().parse().unwrap_or(f64::from(*v)),
);

impl_to_sql_value!(Bool: bool => |v| *v);

impl_to_sql_value!(Text:
    str => |v| v.to_string(),
    String => |v| v.clone(),
    char => |v| v.to_string(),
);

impl_to_sql_value!(Bytes:
    [u8] => |v| v.to_vec(),
    Vec<u8> => |v| v.clone(),
);

impl_to_sql_value!(Interval: Duration => |v| *v);
impl_to_sql_value!(Date: NaiveDate => |v| *v);
impl_to_sql_value!(Uuid: Uuid => |v| *v);

impl_to_sql_value!(Timestamp:
    NaiveDateTime => |v| Utc.from_utc_datetime(v).fixed_offset(),
);

impl<Tz: TimeZone> ToSqlValue for DateTime<Tz> {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        Ok(SqlValue::Timestamp(self.fixed_offset()))
    }
}

impl ToSqlValue for serde_json::Value {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        SqlValue::json(self)
    }
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        Ok(self.clone())
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        match self {
            Some(v) => v.to_sql_value(),
            None => Ok(SqlValue::Null),
        }
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for &T {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        (**self).to_sql_value()
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for Box<T> {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        (**self).to_sql_value()
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for Arc<T> {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        (**self).to_sql_value()
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for Rc<T> {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        (**self).to_sql_value()
    }
}

impl<T> ToSqlValue for Cow<'_, T>
where
    T: ToSqlValue + ToOwned + ?Sized,
{
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        (**self).to_sql_value()
    }
}

#[cfg(feature = "rust_decimal")]
impl ToSqlValue for rust_decimal::Decimal {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        Ok(SqlValue::Numeric(self.to_string()))
    }
}

#[cfg(feature = "time")]
impl ToSqlValue for time::OffsetDateTime {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        let out_of_range =
            || crate::BindError::serialization(format!("timestamp out of range: {self}"));
        let offset =
            FixedOffset::east_opt(self.offset().whole_seconds()).ok_or_else(out_of_range)?;
        let utc = DateTime::from_timestamp(self.unix_timestamp(), self.nanosecond())
            .ok_or_else(out_of_range)?;
        Ok(SqlValue::Timestamp(utc.with_timezone(&offset)))
    }
}

/// Pre-serialized JSON text.
///
/// Rendered as an escaped text literal in SQL mode. In JSON-path mode it is
/// emitted as-is instead of being wrapped into a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawJson(pub String);

impl RawJson {
    pub fn new(json: impl Into<String>) -> Self {
        Self(json.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToSqlValue for RawJson {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        Ok(SqlValue::Json(self.0.clone()))
    }
}

/// Bind any `Serialize` value as JSON.
///
/// ```ignore
/// binder.bind("payload", Json(&event))?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Json<T>(pub T);

impl<T: Serialize> ToSqlValue for Json<T> {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        SqlValue::json(&self.0)
    }
}

/// Bind a value through its `Display` output as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> ToSqlValue for Displayed<T> {
    fn to_sql_value(&self) -> BindResult<SqlValue> {
        Ok(SqlValue::display(&self.0))
    }
}
