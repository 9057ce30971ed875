/// JWT viewer middleware for Bearer/Token credentials
///
/// Resolves the request's viewer from an HS256 token and stores it in the
/// request extensions. A request without an Authorization header passes
/// through anonymously; a present but invalid credential is rejected with 401.
/// Routes pick their auth mode through the extractor they take:
/// [`Viewer`] (optional) or [`AuthUser`] (required).
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

/// Claims carried by viewer tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated principal
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Authenticated principal stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Validates viewer tokens against a shared HS256 secret
#[derive(Clone)]
pub struct JwtValidator {
    key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl JwtValidator {
    pub fn new(secret: &str) -> Self {
        Self {
            key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            validation: Arc::new(Validation::new(Algorithm::HS256)),
        }
    }

    pub fn validate(&self, token: &str) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.key, &self.validation)
    }
}

/// Strip the credential scheme. Both `Bearer` and the RealWorld-style `Token`
/// prefixes are accepted.
pub fn extract_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("Token "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuthMiddleware {
    validator: JwtValidator,
}

impl JwtAuthMiddleware {
    pub fn new(validator: JwtValidator) -> Self {
        Self { validator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
            validator: self.validator.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
    validator: JwtValidator,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let validator = self.validator.clone();

        Box::pin(async move {
            // Header borrow must end before extensions_mut()
            let auth_header = match req.headers().get("Authorization") {
                Some(header) => match header.to_str() {
                    Ok(h) => Some(h.to_string()),
                    Err(_) => return Err(ErrorUnauthorized("Invalid Authorization header")),
                },
                None => None,
            };

            if let Some(auth_header) = auth_header {
                let token = extract_token(&auth_header).ok_or_else(|| {
                    ErrorUnauthorized("Invalid Authorization scheme, expected Bearer or Token")
                })?;

                let username = match validator.validate(token) {
                    Ok(token_data) => token_data.claims.username,
                    Err(e) => {
                        tracing::debug!("Token validation failed: {}", e);
                        return Err(ErrorUnauthorized("Invalid or expired token"));
                    }
                };

                req.extensions_mut()
                    .insert(AuthenticatedUser { username });
            }

            service.call(req).await
        })
    }
}

/// Optional viewer: `Some(username)` when the request carried a valid token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer(pub Option<String>);

impl Viewer {
    pub fn username(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for Viewer {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let username = req
            .extensions()
            .get::<AuthenticatedUser>()
            .map(|user| user.username.clone());
        ready(Ok(Viewer(username)))
    }
}

/// Required viewer: rejects the request with 401 when no identity was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub String);

impl AuthUser {
    pub fn username(&self) -> &str {
        &self.0
    }
}

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(AuthUser(user.username.clone()))),
            None => ready(Err(ErrorUnauthorized("Authentication required"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, web, App, HttpResponse};
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn token_for(username: &str, secret: &str) -> String {
        let claims = Claims {
            username: username.to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: None,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    async fn whoami(viewer: Viewer) -> HttpResponse {
        HttpResponse::Ok().body(viewer.0.unwrap_or_else(|| "anonymous".to_string()))
    }

    async fn private(user: AuthUser) -> HttpResponse {
        HttpResponse::Ok().body(user.0)
    }

    macro_rules! app {
        () => {
            actix_test::init_service(
                App::new()
                    .wrap(JwtAuthMiddleware::new(JwtValidator::new(SECRET)))
                    .route("/whoami", web::get().to(whoami))
                    .route("/private", web::get().to(private)),
            )
            .await
        };
    }

    #[test]
    fn test_extract_token_schemes() {
        assert_eq!(extract_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_token("Token abc"), Some("abc"));
        assert_eq!(extract_token("Basic abc"), None);
        assert_eq!(extract_token("Bearer "), None);
    }

    #[test]
    fn test_validator_rejects_foreign_secret() {
        let validator = JwtValidator::new(SECRET);
        assert!(validator.validate(&token_for("alice", "other")).is_err());
        let data = validator.validate(&token_for("alice", SECRET)).unwrap();
        assert_eq!(data.claims.username, "alice");
    }

    #[actix_web::test]
    async fn test_anonymous_request_passes_through() {
        let app = app!();
        let req = actix_test::TestRequest::get().uri("/whoami").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn test_valid_token_resolves_viewer() {
        let app = app!();
        let req = actix_test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Token {}", token_for("alice", SECRET))))
            .to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "alice");
    }

    #[actix_web::test]
    async fn test_required_route_rejects_anonymous() {
        let app = app!();
        let req = actix_test::TestRequest::get().uri("/private").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_invalid_token_is_rejected() {
        let app = app!();
        let req = actix_test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = actix_test::try_call_service(&app, req).await;
        let status = match resp {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_unknown_scheme_is_rejected() {
        let app = app!();
        let req = actix_test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Basic {}", token_for("alice", SECRET))))
            .to_request();
        let status = match actix_test::try_call_service(&app, req).await {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
