/// Favorite handlers
use crate::app_state::AppState;
use crate::error::Result;
use crate::models::PitcherEnvelope;
use actix_middleware::AuthUser;
use actix_web::{web, HttpResponse};

/// `POST /pitchers/{id}/favorite`
pub async fn favorite_pitcher(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let pitcher = state
        .favorites
        .favorite(path.into_inner(), user.username())
        .await?;
    Ok(HttpResponse::Ok().json(PitcherEnvelope { pitcher }))
}

/// `DELETE /pitchers/{id}/favorite`
pub async fn unfavorite_pitcher(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let pitcher = state
        .favorites
        .unfavorite(path.into_inner(), user.username())
        .await?;
    Ok(HttpResponse::Ok().json(PitcherEnvelope { pitcher }))
}
