/// Pitcher handlers - listing, feed and detail
use crate::app_state::AppState;
use crate::error::Result;
use crate::models::{FeedQuery, ListQuery, PitcherEnvelope};
use actix_middleware::{AuthUser, Viewer};
use actix_web::{web, HttpResponse};

/// `GET /pitchers`
pub async fn list_pitchers(
    state: web::Data<AppState>,
    viewer: Viewer,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let list = state.pitchers.list_all(&query, viewer.username()).await?;
    Ok(HttpResponse::Ok().json(list))
}

/// `GET /pitchers/feed`
pub async fn get_feed(
    state: web::Data<AppState>,
    user: AuthUser,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse> {
    let list = state.pitchers.list_feed(&query, user.username()).await?;
    Ok(HttpResponse::Ok().json(list))
}

/// `GET /pitchers/{id}`
pub async fn get_pitcher(
    state: web::Data<AppState>,
    viewer: Viewer,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let pitcher = state
        .pitchers
        .get_by_id(path.into_inner(), viewer.username())
        .await?;
    Ok(HttpResponse::Ok().json(PitcherEnvelope { pitcher }))
}
