/// HTTP handlers for pitcher endpoints
///
/// - Pitchers: listing, feed, detail
/// - Comments: list, add, delete
/// - Favorites: favorite, unfavorite
/// - Health: readiness and liveness probes
pub mod comments;
pub mod favorites;
pub mod health;
pub mod pitchers;

pub use comments::{add_comment, delete_comment, list_comments};
pub use favorites::{favorite_pitcher, unfavorite_pitcher};
pub use health::{health, liveness};
pub use pitchers::{get_feed, get_pitcher, list_pitchers};

use actix_middleware::{JwtAuthMiddleware, JwtValidator};
use actix_web::web;

/// Register the pitcher routes behind the viewer middleware.
/// `/pitchers/feed` is registered ahead of `/pitchers/{id}` so the literal
/// segment wins.
pub fn configure(cfg: &mut web::ServiceConfig, validator: &JwtValidator) {
    cfg.service(
        web::scope("/pitchers")
            .wrap(JwtAuthMiddleware::new(validator.clone()))
            .service(web::resource("").route(web::get().to(list_pitchers)))
            .service(web::resource("/feed").route(web::get().to(get_feed)))
            .service(web::resource("/{id}").route(web::get().to(get_pitcher)))
            .service(
                web::resource("/{id}/comments")
                    .route(web::get().to(list_comments))
                    .route(web::post().to(add_comment)),
            )
            .service(
                web::resource("/{id}/comments/{comment_id}")
                    .route(web::delete().to(delete_comment)),
            )
            .service(
                web::resource("/{id}/favorite")
                    .route(web::post().to(favorite_pitcher))
                    .route(web::delete().to(unfavorite_pitcher)),
            ),
    );
}
