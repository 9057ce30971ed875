//! # Actix Middleware Library
//!
//! Shared middleware components for the pitcher backend Actix services
//!
//! ## Modules
//! - `jwt_auth`: JWT viewer resolution plus optional/required viewer extractors

pub mod jwt_auth;

pub use jwt_auth::{AuthUser, AuthenticatedUser, Claims, JwtAuthMiddleware, JwtValidator, Viewer};
