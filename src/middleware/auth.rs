// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP Basic authentication middleware.
//!
//! Passwords are stored as the hex SHA-512 of `salt + password`.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use ring::rand::{SecureRandom, SystemRandom};
use sha2::{Digest, Sha512};
use std::sync::Arc;
use subtle::ConstantTimeEq;

const SALT_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const SALT_LENGTH: usize = 16;

/// Stored credential for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredential {
    pub salt: String,
    /// Lowercase hex SHA-512 of `salt + password`
    pub password_hash: String,
}

impl UserCredential {
    pub fn from_password(salt: &str, password: &str) -> Self {
        Self {
            salt: salt.to_string(),
            password_hash: hash_password(salt, password),
        }
    }

    /// Constant-time password check.
    pub fn verify(&self, password: &str) -> bool {
        let candidate = hash_password(&self.salt, password);
        candidate
            .as_bytes()
            .ct_eq(self.password_hash.as_bytes())
            .into()
    }
}

/// Authenticated user, inserted into request extensions.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// Hex SHA-512 of `salt + password`.
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Random alphanumeric salt.
pub fn generate_salt() -> anyhow::Result<String> {
    let rng = SystemRandom::new();
    let mut bytes = [0u8; SALT_LENGTH];
    rng.fill(&mut bytes)
        .map_err(|_| anyhow::anyhow!("System RNG failure"))?;

    Ok(bytes
        .iter()
        .map(|b| SALT_ALPHABET[*b as usize % SALT_ALPHABET.len()] as char)
        .collect())
}

/// Split a `Basic` authorization header into user name and password.
fn parse_basic_auth(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Middleware that requires valid Basic credentials.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (user_id, password) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_basic_auth)
        .ok_or(AppError::Unauthorized)?;

    let authorized = state
        .config
        .users
        .get(&user_id)
        .is_some_and(|credential| credential.verify(&password));

    if !authorized {
        tracing::warn!(user_id = %user_id, "Rejected credentials");
        return Err(AppError::Unauthorized);
    }

    request.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(request).await)
}
