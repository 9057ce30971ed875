/// Comment service - list, add and delete comments on a pitcher
use super::{
    ensure_pitcher_exists, observe, projection, resolve_user_id, with_store_timeout,
    ServiceSettings,
};
use crate::db::PitcherStore;
use crate::error::{AppError, Result};
use crate::models::CommentView;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

pub struct CommentService {
    store: Arc<dyn PitcherStore>,
    settings: ServiceSettings,
}

impl CommentService {
    pub fn new(store: Arc<dyn PitcherStore>, settings: ServiceSettings) -> Self {
        Self { store, settings }
    }

    /// Comments on a pitcher in id order.
    ///
    /// With `comments_viewer_scoped` set, an authenticated viewer only sees
    /// their own comments; anonymous requests always see every comment.
    pub async fn list_comments(
        &self,
        pitcher_id: i32,
        viewer: Option<&str>,
    ) -> Result<Vec<CommentView>> {
        let started = Instant::now();
        let result = self.list_comments_inner(pitcher_id, viewer).await;
        observe("list_comments", started, &result);
        result
    }

    async fn list_comments_inner(
        &self,
        pitcher_id: i32,
        viewer: Option<&str>,
    ) -> Result<Vec<CommentView>> {
        let timeout = self.settings.query_timeout;
        ensure_pitcher_exists(self.store.as_ref(), timeout, pitcher_id).await?;

        let author_filter = if self.settings.comments_viewer_scoped {
            viewer
        } else {
            None
        };
        let comments = with_store_timeout(
            timeout,
            self.store.find_comments(pitcher_id, author_filter),
        )
        .await?;

        Ok(comments
            .iter()
            .map(|c| projection::comment_view(c, viewer))
            .collect())
    }

    /// Create a comment authored by the viewer. A blank body is rejected
    /// before anything is written.
    pub async fn add_comment(
        &self,
        pitcher_id: i32,
        body: Option<&str>,
        viewer: &str,
    ) -> Result<CommentView> {
        let started = Instant::now();
        let result = self.add_comment_inner(pitcher_id, body, viewer).await;
        observe("add_comment", started, &result);
        result
    }

    async fn add_comment_inner(
        &self,
        pitcher_id: i32,
        body: Option<&str>,
        viewer: &str,
    ) -> Result<CommentView> {
        let body = match body {
            Some(body) if !body.trim().is_empty() => body,
            _ => return Err(AppError::validation("body", "can't be blank")),
        };

        let timeout = self.settings.query_timeout;
        let author_id = resolve_user_id(self.store.as_ref(), timeout, viewer).await?;
        ensure_pitcher_exists(self.store.as_ref(), timeout, pitcher_id).await?;

        let comment = with_store_timeout(
            timeout,
            self.store.create_comment(pitcher_id, author_id, body),
        )
        .await?;

        info!(comment_id = comment.id, pitcher_id, author = viewer, "comment added");
        Ok(projection::comment_view(&comment, Some(viewer)))
    }

    /// Delete a comment the viewer wrote on this pitcher. Anything else,
    /// including a comment by another author, is `NotFound` and deletes nothing.
    pub async fn delete_comment(&self, pitcher_id: i32, comment_id: i32, viewer: &str) -> Result<()> {
        let started = Instant::now();
        let result = self.delete_comment_inner(pitcher_id, comment_id, viewer).await;
        observe("delete_comment", started, &result);
        result
    }

    async fn delete_comment_inner(
        &self,
        pitcher_id: i32,
        comment_id: i32,
        viewer: &str,
    ) -> Result<()> {
        let timeout = self.settings.query_timeout;
        let author_id = resolve_user_id(self.store.as_ref(), timeout, viewer).await?;

        let deleted = with_store_timeout(
            timeout,
            self.store.delete_comment(comment_id, pitcher_id, author_id),
        )
        .await?;

        if !deleted {
            return Err(AppError::NotFound(format!("Comment {}", comment_id)));
        }

        info!(comment_id, pitcher_id, author = viewer, "comment deleted");
        Ok(())
    }
}
