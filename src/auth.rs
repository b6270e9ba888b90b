// ABOUTME: JWT-based user authentication and bcrypt password hashing
// ABOUTME: Issues HS256 session tokens and resolves bearer headers to usernames
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Meal Planner Contributors

//! # Authentication
//!
//! Sessions are stateless HS256 tokens whose subject is the username. Logout
//! is a client-side concern: nothing is revoked server-side.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, TimeDelta, Utc};
use http::HeaderMap;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `JWT` claims for user authentication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Token issued at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Encoded `JWT`
    pub token: String,
    /// Expiry instant
    pub expires_at: DateTime<Utc>,
}

/// Signs and validates session tokens
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthManager")
            .field("token_expiry_hours", &self.token_expiry_hours)
            .finish_non_exhaustive()
    }
}

impl AuthManager {
    /// Create a new authentication manager from a shared secret
    #[must_use]
    pub fn new(jwt_secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret),
            decoding_key: DecodingKey::from_secret(jwt_secret),
            token_expiry_hours,
        }
    }

    /// Generate a token for `username`
    ///
    /// # Errors
    ///
    /// Returns an internal error if `JWT` encoding fails
    pub fn generate_token(&self, username: &str) -> AppResult<IssuedToken> {
        self.generate_token_at(username, Utc::now())
    }

    /// Generate a token as if issued at `now`
    ///
    /// # Errors
    ///
    /// Returns an internal error if the expiry is not representable or `JWT`
    /// encoding fails
    pub fn generate_token_at(&self, username: &str, now: DateTime<Utc>) -> AppResult<IssuedToken> {
        let expires_at = TimeDelta::try_hours(self.token_expiry_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Token lifetime of {}h is out of range",
                    self.token_expiry_hours
                ))
            })?;
        let claims = Claims {
            sub: username.to_owned(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` if the signature, format, or expiry check fails
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))
    }

    /// Resolve an `Authorization: Bearer <token>` header to a username
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when the header is missing and `AuthInvalid`
    /// when it is malformed or the token does not validate
    pub fn authenticate_headers(&self, headers: &HeaderMap) -> AppResult<String> {
        let header = headers
            .get(http::header::AUTHORIZATION)
            .ok_or_else(AppError::auth_required)?
            .to_str()
            .map_err(|_| AppError::auth_invalid("Invalid authorization header format"))?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::auth_invalid("Authorization header must be a Bearer token"))?;

        Ok(self.validate_token(token)?.sub)
    }

    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> AppError {
        tracing::debug!("JWT token validation failed: {:?}", e);
        match e.kind() {
            ErrorKind::ExpiredSignature => AppError::auth_invalid("Token has expired"),
            ErrorKind::InvalidSignature => {
                AppError::auth_invalid("Token signature verification failed")
            }
            ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                AppError::auth_invalid("Token is malformed")
            }
            _ => AppError::auth_invalid(format!("Token validation failed: {e}")),
        }
    }
}

/// Hash a password with bcrypt off the async runtime
///
/// # Errors
///
/// Returns an internal error if hashing fails or the blocking task panics
pub async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

/// Check a password against a bcrypt hash off the async runtime
///
/// A corrupt hash counts as a mismatch.
///
/// # Errors
///
/// Returns an internal error if the blocking task panics
pub async fn verify_password(password: String, password_hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        bcrypt::verify(password, &password_hash).unwrap_or_else(|e| {
            tracing::warn!("Stored password hash could not be verified: {e}");
            false
        })
    })
    .await
    .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
}
