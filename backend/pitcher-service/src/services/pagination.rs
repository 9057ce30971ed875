//! Offset/limit coercion for listing endpoints

use crate::models::Page;

/// Default page size of `GET /pitchers`
pub const DEFAULT_LIST_LIMIT: i64 = 20;
/// Default page size of `GET /pitchers/feed`
pub const DEFAULT_FEED_LIMIT: i64 = 10;

/// Coerce a raw query value to a count.
///
/// Absent, blank, non-numeric, non-finite and non-positive values fall back to
/// `default`. Fractions truncate toward zero; a value that truncates to zero
/// also falls back.
pub fn coerce_count(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return default;
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.trunc() >= 1.0 => value.trunc() as i64,
        _ => default,
    }
}

impl Page {
    /// Build a page from raw `offset`/`limit`, clamping `limit` to `max_limit`
    pub fn from_params(
        offset: Option<&str>,
        limit: Option<&str>,
        default_limit: i64,
        max_limit: i64,
    ) -> Self {
        Self {
            offset: coerce_count(offset, 0),
            limit: coerce_count(limit, default_limit).min(max_limit.max(1)),
        }
    }
}
