/// Pitcher service - listing, feed and detail
use super::pagination::{DEFAULT_FEED_LIMIT, DEFAULT_LIST_LIMIT};
use super::{observe, projection, resolve_user_id, with_store_timeout, ServiceSettings};
use crate::db::{PitcherFilter, PitcherStore};
use crate::error::{AppError, Result};
use crate::models::{FeedQuery, ListQuery, Page, PitcherDetail, PitcherList};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub struct PitcherService {
    store: Arc<dyn PitcherStore>,
    settings: ServiceSettings,
}

impl PitcherService {
    pub fn new(store: Arc<dyn PitcherStore>, settings: ServiceSettings) -> Self {
        Self { store, settings }
    }

    /// Filtered, paginated listing. `pitchers_count` is the filtered total
    /// before pagination.
    pub async fn list_all(&self, query: &ListQuery, viewer: Option<&str>) -> Result<PitcherList> {
        let started = Instant::now();
        let result = self.list_all_inner(query, viewer).await;
        observe("list_pitchers", started, &result);
        result
    }

    async fn list_all_inner(&self, query: &ListQuery, viewer: Option<&str>) -> Result<PitcherList> {
        let filter = PitcherFilter::from_query(query, viewer);
        let page = Page::from_params(
            query.offset.as_deref(),
            query.limit.as_deref(),
            DEFAULT_LIST_LIMIT,
            self.settings.max_page_size,
        );

        self.fetch_page(&filter, page, viewer).await
    }

    /// Pitchers authored by users the viewer follows
    pub async fn list_feed(&self, query: &FeedQuery, viewer: &str) -> Result<PitcherList> {
        let started = Instant::now();
        let result = self.list_feed_inner(query, viewer).await;
        observe("feed", started, &result);
        result
    }

    async fn list_feed_inner(&self, query: &FeedQuery, viewer: &str) -> Result<PitcherList> {
        let viewer_id =
            resolve_user_id(self.store.as_ref(), self.settings.query_timeout, viewer).await?;
        let page = Page::from_params(
            query.offset.as_deref(),
            query.limit.as_deref(),
            DEFAULT_FEED_LIMIT,
            self.settings.max_page_size,
        );

        self.fetch_page(&PitcherFilter::feed(viewer_id), page, Some(viewer))
            .await
    }

    /// Reduced detail projection of one pitcher
    pub async fn get_by_id(&self, pitcher_id: i32, viewer: Option<&str>) -> Result<PitcherDetail> {
        let started = Instant::now();
        let result = self.get_by_id_inner(pitcher_id, viewer).await;
        observe("get_pitcher", started, &result);
        result
    }

    async fn get_by_id_inner(&self, pitcher_id: i32, viewer: Option<&str>) -> Result<PitcherDetail> {
        let record = with_store_timeout(
            self.settings.query_timeout,
            self.store.find_pitcher(pitcher_id),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pitcher {}", pitcher_id)))?;

        Ok(projection::pitcher_detail(&record, viewer))
    }

    // Count and page are separate round-trips, so the count can drift from
    // the page under concurrent writes.
    async fn fetch_page(
        &self,
        filter: &PitcherFilter,
        page: Page,
        viewer: Option<&str>,
    ) -> Result<PitcherList> {
        let timeout = self.settings.query_timeout;
        let pitchers_count =
            with_store_timeout(timeout, self.store.count_pitchers(filter)).await?;
        let records = with_store_timeout(timeout, self.store.find_pitchers(filter, page)).await?;

        debug!(
            total = pitchers_count,
            returned = records.len(),
            "listed pitchers"
        );

        Ok(PitcherList {
            pitchers: records
                .iter()
                .map(|r| projection::pitcher_view(r, viewer))
                .collect(),
            pitchers_count,
        })
    }
}
