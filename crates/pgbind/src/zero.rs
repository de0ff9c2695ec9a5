//! Turning default values into `NULL`.
//!
//! Rows are often built from structs whose "unset" fields hold `0` or `""`.
//! [`null_if_zero`] maps those to `None` so they bind as `NULL`:
//!
//! ```
//! use pgbind::{null_if_zero, to_sql};
//!
//! assert_eq!(to_sql(&null_if_zero(0_i64))?, "NULL");
//! assert_eq!(to_sql(&null_if_zero(7_i64))?, "7");
//! assert_eq!(to_sql(&null_if_zero("  "))?, "NULL");
//! # Ok::<(), pgbind::BindError>(())
//! ```

use crate::literal::RawJson;

/// Types with a "zero" value that should be stored as `NULL`.
///
/// Not implemented for floats and booleans.
pub trait ZeroValue {
    fn is_zero_value(&self) -> bool;
}

macro_rules! impl_zero_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ZeroValue for $ty {
                fn is_zero_value(&self) -> bool {
                    *self == 0
                }
            }
        )+
    };
}

impl_zero_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ZeroValue for str {
    fn is_zero_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl ZeroValue for String {
    fn is_zero_value(&self) -> bool {
        self.as_str().is_zero_value()
    }
}

impl ZeroValue for [u8] {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for Vec<u8> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for RawJson {
    fn is_zero_value(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: ZeroValue + ?Sized> ZeroValue for &T {
    fn is_zero_value(&self) -> bool {
        (**self).is_zero_value()
    }
}

/// `None` for zero integers, blank strings and empty byte sequences.
pub fn null_if_zero<T: ZeroValue>(value: T) -> Option<T> {
    if value.is_zero_value() {
        None
    } else {
        Some(value)
    }
}
