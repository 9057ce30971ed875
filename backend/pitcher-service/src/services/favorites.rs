/// Favorite service - connect/disconnect the viewer and a pitcher
use super::{
    ensure_pitcher_exists, observe, projection, resolve_user_id, with_store_timeout,
    ServiceSettings,
};
use crate::db::PitcherStore;
use crate::error::{AppError, Result};
use crate::models::PitcherView;
use std::sync::Arc;
use std::time::Instant;

pub struct FavoriteService {
    store: Arc<dyn PitcherStore>,
    settings: ServiceSettings,
}

impl FavoriteService {
    pub fn new(store: Arc<dyn PitcherStore>, settings: ServiceSettings) -> Self {
        Self { store, settings }
    }

    /// Add the viewer to the pitcher's favoritedBy set. Idempotent.
    pub async fn favorite(&self, pitcher_id: i32, viewer: &str) -> Result<PitcherView> {
        let started = Instant::now();
        let result = self.toggle(pitcher_id, viewer, true).await;
        observe("favorite", started, &result);
        result
    }

    /// Remove the viewer from the pitcher's favoritedBy set. Idempotent.
    pub async fn unfavorite(&self, pitcher_id: i32, viewer: &str) -> Result<PitcherView> {
        let started = Instant::now();
        let result = self.toggle(pitcher_id, viewer, false).await;
        observe("unfavorite", started, &result);
        result
    }

    async fn toggle(&self, pitcher_id: i32, viewer: &str, favorited: bool) -> Result<PitcherView> {
        let timeout = self.settings.query_timeout;
        let user_id = resolve_user_id(self.store.as_ref(), timeout, viewer).await?;
        ensure_pitcher_exists(self.store.as_ref(), timeout, pitcher_id).await?;

        if favorited {
            with_store_timeout(timeout, self.store.add_favorite(pitcher_id, user_id)).await?;
        } else {
            with_store_timeout(timeout, self.store.remove_favorite(pitcher_id, user_id)).await?;
        }
        tracing::debug!(pitcher_id, user = viewer, favorited, "favorite updated");

        let record = with_store_timeout(timeout, self.store.find_pitcher(pitcher_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pitcher {}", pitcher_id)))?;

        Ok(projection::pitcher_view(&record, Some(viewer)))
    }
}
