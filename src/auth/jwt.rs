use axum::extract::FromRef;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::auth::repo::User;
use crate::config::JwtConfig;
use crate::state::AppState;

/// JWT payload: subject (username), user id and absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub user_id: i64,
    pub exp: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user: &User) -> anyhow::Result<String> {
        let exp = OffsetDateTime::now_utc() + self.ttl;
        let claims = Claims {
            sub: user.username.clone(),
            user_id: user.id,
            exp: exp.unix_timestamp(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = user.id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No grace window: a token one tick past exp is rejected
        validation.leeway = 0;
        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => {
                debug!(user_id = data.claims.user_id, "jwt verified");
                Ok(data.claims)
            }
            Err(e) => Err(match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user() -> User {
        User {
            id: 7,
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "x".into(),
            created_at: OffsetDateTime::now_utc(),
            updated_at: None,
        }
    }

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    fn encode_with_exp(keys: &JwtKeys, exp: i64) -> String {
        let claims = Claims {
            sub: "alice".into(),
            user_id: 7,
            exp,
        };
        encode(&Header::default(), &claims, &keys.encoding).expect("encode")
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let user = make_user();
        let token = keys.sign(&user).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.user_id, 7);
        assert!(claims.exp > OffsetDateTime::now_utc().unix_timestamp());
    }

    #[tokio::test]
    async fn verify_rejects_wrong_secret() {
        let keys = make_keys();
        let token = keys.sign(&make_user()).expect("sign");
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"other-secret"),
            decoding: DecodingKey::from_secret(b"other-secret"),
            ttl: Duration::minutes(5),
        };
        assert_eq!(other.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys();
        assert_eq!(keys.verify("not.a.token"), Err(TokenError::Malformed));
        assert_eq!(keys.verify(""), Err(TokenError::Malformed));
    }

    #[tokio::test]
    async fn verify_rejects_expired_token() {
        let keys = make_keys();
        let past = OffsetDateTime::now_utc().unix_timestamp() - 3600;
        let token = encode_with_exp(&keys, past);
        assert_eq!(keys.verify(&token), Err(TokenError::Expired));
    }

    #[tokio::test]
    async fn expiry_boundary_has_no_leeway() {
        let keys = make_keys();
        // One second past exp is already rejected
        let just_past = OffsetDateTime::now_utc().unix_timestamp() - 1;
        let token = encode_with_exp(&keys, just_past);
        assert_eq!(keys.verify(&token), Err(TokenError::Expired));

        let not_yet = OffsetDateTime::now_utc().unix_timestamp() + 30;
        let token = encode_with_exp(&keys, not_yet);
        assert!(keys.verify(&token).is_ok());
    }
}
