//! Password hashing, bearer tokens and the capability gate.
//!
//! Tokens are HS256 JWTs signed with a base64-encoded key from the
//! environment. Role checks never trust the token's role claim alone: the
//! caller's profile row is re-fetched so a role change takes effect on the
//! next request, not at token expiry.

use std::sync::Arc;

use argon2::password_hash::{PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};
use rand::rngs::OsRng;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use brickdesk_core::profiles::{role_allows, Capability, Profile, Role};

use crate::error::ApiError;
use crate::main_lib::AppState;

const TOKEN_TTL_SECS: i64 = 60 * 60 * 12;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Profile id.
    pub sub: String,
    pub role: Role,
    pub exp: i64,
}

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthManager {
    /// Builds a manager from a base64-encoded signing secret.
    pub fn new(secret_base64: &str) -> anyhow::Result<Self> {
        let secret = BASE64.decode(secret_base64)?;
        Ok(AuthManager {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
        })
    }

    pub fn hash_password(&self, password: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ApiError::internal(format!("Failed to hash password: {e}")))
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub fn issue_token(&self, profile: &Profile) -> Result<String, ApiError> {
        let claims = Claims {
            sub: profile.id.clone(),
            role: profile.role,
            exp: chrono::Utc::now().timestamp() + TOKEN_TTL_SECS,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::internal(format!("Failed to sign token: {e}")))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized("Missing or invalid bearer token".to_string()))
    }
}

/// Authenticated caller, extracted from the `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub profile_id: String,
    pub role: Role,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Expected a bearer token".to_string()))?;

        let claims = state.auth.verify_token(token)?;
        Ok(AuthUser {
            profile_id: claims.sub,
            role: claims.role,
        })
    }
}

/// Re-fetches the caller's profile and checks `capability` against its
/// current role. Returns the profile so handlers can reuse it.
pub fn authorize(
    state: &AppState,
    user: &AuthUser,
    capability: Capability,
) -> Result<Profile, ApiError> {
    let profile = state
        .profile_service
        .get_profile(&user.profile_id)
        .map_err(|_| ApiError::Unauthorized("Unknown profile".to_string()))?;

    if !role_allows(profile.role, capability) {
        return Err(ApiError::Forbidden(format!(
            "Role '{}' is not allowed to {:?}",
            profile.role.as_db_str(),
            capability
        )));
    }
    Ok(profile)
}
