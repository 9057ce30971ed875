use crate::db::PitcherStore;
use crate::services::{CommentService, FavoriteService, PitcherService, ServiceSettings};
use std::sync::Arc;

/// Shared handler state, registered once as `web::Data<AppState>`
#[derive(Clone)]
pub struct AppState {
    pub pitchers: Arc<PitcherService>,
    pub comments: Arc<CommentService>,
    pub favorites: Arc<FavoriteService>,
    pub store: Arc<dyn PitcherStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PitcherStore>, settings: ServiceSettings) -> Self {
        Self {
            pitchers: Arc::new(PitcherService::new(store.clone(), settings.clone())),
            comments: Arc::new(CommentService::new(store.clone(), settings.clone())),
            favorites: Arc::new(FavoriteService::new(store.clone(), settings)),
            store,
        }
    }
}
