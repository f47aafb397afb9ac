//! Signed bearer tokens (HS256 JWT).
//!
//! Two purposes share one key: access tokens gate the mutating planet routes, and
//! password-reset tokens are mailed by the retrieval route. A reset token carries a
//! fingerprint of the password hash it was issued against, so it stops verifying
//! as soon as the password changes.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::AuthError;
use crate::config::AuthConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    Access,
    PasswordReset,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User email.
    pub sub: String,
    pub purpose: TokenPurpose,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Hex SHA-256 of the password hash (reset tokens only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fgp: Option<String>,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl_secs: i64,
    reset_ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &[u8], access_ttl_secs: u64, reset_ttl_secs: u64) -> Self {
        TokenService {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            access_ttl_secs: i64::try_from(access_ttl_secs).unwrap_or(i64::MAX),
            reset_ttl_secs: i64::try_from(reset_ttl_secs).unwrap_or(i64::MAX),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.expose_secret().as_bytes(),
            config.access_ttl_secs,
            config.reset_ttl_secs,
        )
    }

    /// Issue an access token whose subject is the user's email.
    pub fn issue_access(&self, email: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        self.sign(&Claims {
            sub: email.to_string(),
            purpose: TokenPurpose::Access,
            iat: now,
            exp: now.saturating_add(self.access_ttl_secs),
            jti: None,
            fgp: None,
        })
    }

    /// Verify an access token; reset tokens are rejected here.
    pub fn verify_access(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify(token, TokenPurpose::Access)
    }

    /// Issue a one-time reset token bound to the current password hash.
    pub fn issue_reset(&self, email: &str, password_hash: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        self.sign(&Claims {
            sub: email.to_string(),
            purpose: TokenPurpose::PasswordReset,
            iat: now,
            exp: now.saturating_add(self.reset_ttl_secs),
            jti: Some(uuid::Uuid::new_v4().to_string()),
            fgp: Some(password_fingerprint(password_hash)),
        })
    }

    /// Verify a reset token's signature, expiry and purpose. The caller still has to
    /// check [`Claims::matches_password`] against the stored hash.
    pub fn verify_reset(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify(token, TokenPurpose::PasswordReset)
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding)?)
    }

    fn verify(&self, token: &str, purpose: TokenPurpose) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            tracing::warn!(error = %e, "token rejected");
            AuthError::InvalidToken
        })?;
        if data.claims.purpose != purpose {
            tracing::warn!(expected = ?purpose, got = ?data.claims.purpose, "token purpose mismatch");
            return Err(AuthError::InvalidToken);
        }
        Ok(data.claims)
    }
}

impl Claims {
    /// True when this token was issued against `password_hash`.
    pub fn matches_password(&self, password_hash: &str) -> bool {
        self.fgp.as_deref() == Some(password_fingerprint(password_hash).as_str())
    }
}

fn password_fingerprint(password_hash: &str) -> String {
    hex::encode(Sha256::digest(password_hash.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(b"test-secret", 3600, 900)
    }

    #[test]
    fn access_token_round_trips_subject() {
        let tokens = service();
        let token = tokens.issue_access("test@gmail.com").unwrap();
        assert!(!token.is_empty());
        let claims = tokens.verify_access(&token).unwrap();
        assert_eq!(claims.sub, "test@gmail.com");
        assert_eq!(claims.purpose, TokenPurpose::Access);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_key() {
        let other = TokenService::new(b"other-secret", 3600, 900);
        let token = other.issue_access("test@gmail.com").unwrap();
        assert!(matches!(service().verify_access(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(service().verify_access("not.a.jwt").is_err());
        assert!(service().verify_access("").is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let tokens = service();
        let past = Utc::now().timestamp() - 7200;
        let token = tokens
            .sign(&Claims {
                sub: "test@gmail.com".into(),
                purpose: TokenPurpose::Access,
                iat: past,
                exp: past + 60,
                jti: None,
                fgp: None,
            })
            .unwrap();
        assert!(matches!(tokens.verify_access(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn purposes_are_not_interchangeable() {
        let tokens = service();
        let reset = tokens.issue_reset("test@gmail.com", "$argon2id$hash").unwrap();
        assert!(tokens.verify_access(&reset).is_err());
        let access = tokens.issue_access("test@gmail.com").unwrap();
        assert!(tokens.verify_reset(&access).is_err());
    }

    #[test]
    fn reset_token_is_bound_to_password_hash() {
        let tokens = service();
        let reset = tokens.issue_reset("test@gmail.com", "$argon2id$old").unwrap();
        let claims = tokens.verify_reset(&reset).unwrap();
        assert!(claims.jti.is_some());
        assert!(claims.matches_password("$argon2id$old"));
        assert!(!claims.matches_password("$argon2id$new"));
    }
}
