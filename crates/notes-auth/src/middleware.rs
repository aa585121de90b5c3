//! Access guard for protected routes

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::AuthError;
use crate::jwt::{Claims, JwtManager};

/// Authenticated caller, resolved from a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
}

impl AuthUser {
    /// Create from JWT claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            id: claims.user.id.clone(),
        }
    }
}

/// Extract bearer token from authorization header
fn extract_bearer_token(header: &str) -> Result<&str, AuthError> {
    match header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::InvalidAuthHeader),
    }
}

/// Authentication middleware
///
/// Rejects the request unless it carries a valid `Authorization: Bearer`
/// token. On success the resolved [`AuthUser`] is added to the request
/// extensions for handlers to pick up.
pub async fn require_auth(
    State(jwt_manager): State<Arc<JwtManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    let token = extract_bearer_token(header)?;
    let claims = jwt_manager.validate_token(token)?;
    let user = AuthUser::from_claims(&claims);

    debug!("Authenticated user: {}", user.id);

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request as HttpRequest, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
    };
    use chrono::{Duration, Utc};
    use tower::ServiceExt;

    async fn whoami(user: AuthUser) -> String {
        user.id
    }

    fn app(jwt: Arc<JwtManager>) -> Router {
        Router::new()
            .route("/protected", get(whoami))
            .layer(from_fn_with_state(jwt, require_auth))
    }

    fn jwt() -> Arc<JwtManager> {
        Arc::new(JwtManager::new("guard-secret", Duration::hours(1)))
    }

    async fn call(app: Router, auth: Option<&str>) -> (StatusCode, String) {
        let mut builder = HttpRequest::builder().uri("/protected");
        if let Some(value) = auth {
            builder = builder.header(AUTHORIZATION, value);
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc").unwrap(), "abc");
        assert!(extract_bearer_token("Basic abc").is_err());
        assert!(extract_bearer_token("Bearer ").is_err());
        assert!(extract_bearer_token("abc").is_err());
    }

    #[tokio::test]
    async fn test_valid_token_resolves_identity() {
        let jwt = jwt();
        let token = jwt.generate_token("user-42").unwrap();

        let (status, body) = call(app(jwt), Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "user-42");
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let (status, body) = call(app(jwt()), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("No token, authorization denied"));
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let (status, body) = call(app(jwt()), Some("Bearer not.a.jwt")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Token is not valid"));
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let jwt = jwt();
        let token = jwt
            .generate_token_at("user-42", Utc::now() - Duration::hours(3))
            .unwrap();

        let (status, body) = call(app(jwt), Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Token is not valid"));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let (status, _) = call(app(jwt()), Some("Basic dXNlcjpwYXNz")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
