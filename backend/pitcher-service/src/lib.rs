/// Pitcher Service Library
///
/// REST backend for pitcher statistics: filtered listing, a personalized feed,
/// detail views, comments and favorites, with `favorited`/`following` flags
/// projected relative to the requesting viewer.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Records, viewer-relative views and request shapes
/// - `services`: Business logic (listing, feed, comments, favorites)
/// - `db`: Filter builder, `PitcherStore` seam and its Postgres implementation
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod app_state;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use app_state::AppState;
pub use config::Config;
pub use error::{AppError, Result};
