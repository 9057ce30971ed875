/// Comment handlers
use crate::app_state::AppState;
use crate::error::Result;
use crate::models::{AddCommentRequest, CommentEnvelope, CommentsEnvelope};
use actix_middleware::{AuthUser, Viewer};
use actix_web::{web, HttpResponse};

/// `GET /pitchers/{id}/comments`
pub async fn list_comments(
    state: web::Data<AppState>,
    viewer: Viewer,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let comments = state
        .comments
        .list_comments(path.into_inner(), viewer.username())
        .await?;
    Ok(HttpResponse::Ok().json(CommentsEnvelope { comments }))
}

/// `POST /pitchers/{id}/comments`
///
/// A missing or unparseable body is treated as a blank comment.
pub async fn add_comment(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<i32>,
    req: Option<web::Json<AddCommentRequest>>,
) -> Result<HttpResponse> {
    let body = req.as_ref().and_then(|r| r.body());
    let comment = state
        .comments
        .add_comment(path.into_inner(), body, user.username())
        .await?;
    Ok(HttpResponse::Ok().json(CommentEnvelope { comment }))
}

/// `DELETE /pitchers/{id}/comments/{comment_id}`
pub async fn delete_comment(
    state: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse> {
    let (pitcher_id, comment_id) = path.into_inner();
    state
        .comments
        .delete_comment(pitcher_id, comment_id, user.username())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
