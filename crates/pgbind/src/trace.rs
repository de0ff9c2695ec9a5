//! Debug events emitted with the `tracing` feature.
//!
//! Without the feature every function here is an empty inline stub.

/// Rendered SQL longer than this (in bytes) is truncated in log events.
pub const MAX_LOGGED_SQL_LENGTH: usize = 200;

#[cfg(feature = "tracing")]
pub(crate) fn cache_hit(key: &str) {
    tracing::debug!(target: "pgbind.cache", key, "template cache hit");
}

#[cfg(feature = "tracing")]
pub(crate) fn cache_miss(key: &str) {
    tracing::debug!(target: "pgbind.cache", key, "template scanned and cached");
}

#[cfg(feature = "tracing")]
pub(crate) fn rendered(sql: &str, bound: usize) {
    let shown = truncate_sql_bytes(sql, MAX_LOGGED_SQL_LENGTH);
    tracing::debug!(
        target: "pgbind.sql",
        bound,
        truncated = shown.len() < sql.len(),
        sql = %shown
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn cache_hit(_key: &str) {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn cache_miss(_key: &str) {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn rendered(_sql: &str, _bound: usize) {}

#[cfg_attr(not(any(feature = "tracing", test)), allow(dead_code))]
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
