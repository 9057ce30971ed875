/// Business logic layer for pitcher-service
///
/// - Pitcher service: listing, feed, detail
/// - Comment service: list, add, delete comments on a pitcher
/// - Favorite service: favorite/unfavorite a pitcher
/// - Projection: viewer-relative shaping of stored records
pub mod comments;
pub mod favorites;
pub mod pagination;
pub mod pitchers;
pub mod projection;

pub use comments::CommentService;
pub use favorites::FavoriteService;
pub use pitchers::PitcherService;

use crate::db::PitcherStore;
use crate::error::{AppError, Result};
use std::future::Future;
use std::time::{Duration, Instant};

/// Knobs shared by the services, filled from [`crate::config::Config`]
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Upper bound for every individual store round-trip
    pub query_timeout: Duration,
    /// Largest accepted `limit`
    pub max_page_size: i64,
    /// Restrict comment listings to comments written by the viewer
    pub comments_viewer_scoped: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            query_timeout: Duration::from_secs(5),
            max_page_size: 100,
            comments_viewer_scoped: false,
        }
    }
}

/// Run one store call under the configured timeout
pub(crate) async fn with_store_timeout<F, T>(duration: Duration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_ms = duration.as_millis() as u64, "store call timed out");
            Err(AppError::Timeout(duration.as_millis() as u64))
        }
    }
}

/// Resolve an authenticated username to its user id. A token for a username
/// with no user row is treated as unauthenticated.
pub(crate) async fn resolve_user_id(
    store: &dyn PitcherStore,
    timeout: Duration,
    username: &str,
) -> Result<i32> {
    with_store_timeout(timeout, store.find_user_id_by_username(username))
        .await?
        .ok_or_else(|| {
            tracing::warn!(username, "token subject has no user record");
            AppError::Unauthorized("Unknown user".to_string())
        })
}

/// Fail with `NotFound` unless the pitcher exists
pub(crate) async fn ensure_pitcher_exists(
    store: &dyn PitcherStore,
    timeout: Duration,
    pitcher_id: i32,
) -> Result<()> {
    if with_store_timeout(timeout, store.pitcher_exists(pitcher_id)).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Pitcher {}", pitcher_id)))
    }
}

/// Record the outcome and latency of a service operation
pub(crate) fn observe<T>(operation: &'static str, started: Instant, result: &Result<T>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    };
    crate::metrics::record_operation(operation, outcome, started.elapsed());
}
