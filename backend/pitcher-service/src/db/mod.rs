/// Database access layer
///
/// - `filter`: composable listing/feed predicates
/// - `pitcher_store`: Postgres implementation of [`PitcherStore`]
pub mod filter;
pub mod pitcher_store;

pub use filter::{FilterClause, PitcherFilter};
pub use pitcher_store::PgPitcherStore;

use crate::error::Result;
use crate::models::{CommentRecord, Page, PitcherRecord};

/// Data-access seam consumed by the services.
///
/// Each method is one round-trip to the persistence engine. Relationship
/// edges (favorites) are plain join-table rows whose uniqueness makes
/// connect/disconnect idempotent.
#[async_trait::async_trait]
pub trait PitcherStore: Send + Sync {
    /// Number of pitchers matching `filter`, ignoring pagination
    async fn count_pitchers(&self, filter: &PitcherFilter) -> Result<i64>;

    /// One page of matching pitchers ordered by id ascending, eager-loaded
    async fn find_pitchers(&self, filter: &PitcherFilter, page: Page)
        -> Result<Vec<PitcherRecord>>;

    async fn find_pitcher(&self, pitcher_id: i32) -> Result<Option<PitcherRecord>>;

    async fn pitcher_exists(&self, pitcher_id: i32) -> Result<bool>;

    async fn find_user_id_by_username(&self, username: &str) -> Result<Option<i32>>;

    /// Comments on a pitcher ordered by id, optionally restricted to one author
    async fn find_comments(
        &self,
        pitcher_id: i32,
        author_username: Option<&str>,
    ) -> Result<Vec<CommentRecord>>;

    async fn create_comment(
        &self,
        pitcher_id: i32,
        author_id: i32,
        body: &str,
    ) -> Result<CommentRecord>;

    /// Delete a comment only if it belongs to `pitcher_id` and was written by
    /// `author_id`. Returns whether a row was deleted.
    async fn delete_comment(&self, comment_id: i32, pitcher_id: i32, author_id: i32)
        -> Result<bool>;

    /// Connect a user to a pitcher's favoritedBy set (no-op if present)
    async fn add_favorite(&self, pitcher_id: i32, user_id: i32) -> Result<()>;

    /// Disconnect a user from a pitcher's favoritedBy set (no-op if absent)
    async fn remove_favorite(&self, pitcher_id: i32, user_id: i32) -> Result<()>;

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
