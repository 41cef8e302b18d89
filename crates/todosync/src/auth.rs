//! Bearer-token authentication.
//!
//! Token *issuance* belongs to an external identity provider; this module
//! only verifies incoming JWTs and extracts the subject claim, which becomes
//! the owning `user_id` threaded explicitly through every service call.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::AppState;

/// Errors produced by token verification.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid bearer token: {0}")]
    InvalidToken(String),
}

/// Verifies a bearer token and resolves it to a user id.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<String, AuthError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

/// HS256 JWT verifier.
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Creates a verifier from a shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<String, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// Extractor for the authenticated user id. Returns 401 if not authenticated.
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or((StatusCode::UNAUTHORIZED, "Missing authorization header"))?;

        let header_value = header
            .to_str()
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid authorization header"))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or((StatusCode::UNAUTHORIZED, "Expected bearer token"))?;

        let user_id = app_state.verifier.verify(token).map_err(|err| {
            tracing::debug!(error = %err, "Token verification failed");
            (StatusCode::UNAUTHORIZED, "Invalid token")
        })?;

        Ok(CurrentUser(user_id))
    }
}

#[cfg(test)]
pub(crate) mod test_tokens {
    use super::Claims;

    pub(crate) const TEST_SECRET: &str = "test-secret";

    /// Mints an HS256 token for `sub` that expires far in the future.
    pub(crate) fn mint(sub: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp: 4_102_444_800, // 2100-01-01
        };
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .expect("encode token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[test]
    fn test_verify_returns_subject() {
        let verifier = JwtVerifier::new(test_tokens::TEST_SECRET);
        let token = test_tokens::mint("auth0|user-1");
        assert_eq!(verifier.verify(&token).unwrap(), "auth0|user-1");
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let verifier = JwtVerifier::new("a-different-secret");
        let token = test_tokens::mint("auth0|user-1");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let claims = Claims {
            sub: "auth0|user-1".to_string(),
            exp: 1_000, // 1970
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(test_tokens::TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let verifier = JwtVerifier::new(test_tokens::TEST_SECRET);
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let verifier = JwtVerifier::new(test_tokens::TEST_SECRET);
        assert!(verifier.verify("not-a-jwt").is_err());
    }
}
