//! JWT token issuer.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use domain::{Account, Application};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account id
    pub uid: i64,
    pub email: String,
    /// Application the token is scoped to
    pub app_id: i32,
    /// Absolute expiry, seconds since the Unix epoch
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims expiring `ttl` after `now`.
    pub fn new(
        account: &Account,
        application: &Application,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

        Self {
            uid: account.id,
            email: account.email.clone(),
            app_id: application.id,
            exp: now.timestamp().saturating_add(ttl_secs),
        }
    }
}

#[derive(Error, Debug)]
pub enum SignError {
    #[error("token signing failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Token signing capability.
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &TokenClaims, secret: &[u8]) -> Result<String, SignError>;
}

/// HMAC-SHA256 JWT signer.
#[derive(Debug, Clone)]
pub struct JwtSigner {
    header: Header,
}

impl Default for JwtSigner {
    fn default() -> Self {
        Self {
            header: Header::new(Algorithm::HS256),
        }
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, claims: &TokenClaims, secret: &[u8]) -> Result<String, SignError> {
        let token = encode(&self.header, claims, &EncodingKey::from_secret(secret))?;
        Ok(token)
    }
}

/// Issues signed, time-bounded tokens for an account and application.
#[derive(Clone)]
pub struct TokenIssuer {
    signer: Arc<dyn TokenSigner>,
}

impl Default for TokenIssuer {
    fn default() -> Self {
        Self::new(Arc::new(JwtSigner::default()))
    }
}

impl TokenIssuer {
    pub fn new(signer: Arc<dyn TokenSigner>) -> Self {
        Self { signer }
    }

    /// Issue a token valid for `ttl` from now, signed with the application's secret.
    pub fn issue(
        &self,
        account: &Account,
        application: &Application,
        ttl: Duration,
    ) -> Result<String, SignError> {
        self.issue_at(account, application, ttl, Utc::now())
    }

    /// Same as `issue` with an explicit issuance instant.
    pub fn issue_at(
        &self,
        account: &Account,
        application: &Application,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, SignError> {
        let claims = TokenClaims::new(account, application, ttl, now);
        self.signer.sign(&claims, application.secret_bytes())
    }
}

/// Verify a token with an application secret and return its claims.
///
/// Rejects bad signatures and expired tokens.
pub fn decode_token(
    token: &str,
    secret: &[u8],
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn account() -> Account {
        Account::new(42, "a@x.com", "hash")
    }

    fn application() -> Application {
        Application::new(1, "test", "test_secret")
    }

    #[test]
    fn test_claims_expiry_is_issuance_plus_ttl() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = TokenClaims::new(&account(), &application(), Duration::from_secs(3600), now);

        assert_eq!(claims.exp, now.timestamp() + 3600);
        assert_eq!(claims.uid, 42);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.app_id, 1);
    }

    #[test]
    fn test_issue_and_decode_with_app_secret() {
        let issuer = TokenIssuer::default();
        let before = Utc::now().timestamp();
        let token = issuer
            .issue(&account(), &application(), Duration::from_secs(600))
            .unwrap();

        let claims = decode_token(&token, b"test_secret").unwrap();
        assert_eq!(claims.uid, 42);
        assert_eq!(claims.app_id, 1);
        assert!((claims.exp - (before + 600)).abs() <= 1);
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = TokenIssuer::default()
            .issue(&account(), &application(), Duration::from_secs(600))
            .unwrap();

        assert!(decode_token(&token, b"another_secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let long_ago = Utc::now() - chrono::Duration::days(1);
        let token = TokenIssuer::default()
            .issue_at(&account(), &application(), Duration::from_secs(60), long_ago)
            .unwrap();

        let err = decode_token(&token, b"test_secret").unwrap_err();
        assert!(matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ));
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let claims = TokenClaims::new(&account(), &application(), Duration::MAX, Utc::now());
        assert_eq!(claims.exp, i64::MAX);
    }
}
