use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, expiry_hours: u64) -> Result<Self, AuthError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AuthError::TokenGeneration(format!("expiry of {} hours is out of range", expiry_hours))
            })?;

        Ok(Self {
            user_id,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Access token not found")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token secret not configured")]
    InvalidSecret,

    #[error("Token generation error: {0}")]
    TokenGeneration(String),
}

/// Resolves a bearer token to the caller's user id.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Uuid, AuthError>;
}

/// HS256 tokens signed with a shared secret.
pub struct JwtVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        })
    }

    pub fn issue(&self, user_id: Uuid, expiry_hours: u64) -> Result<String, AuthError> {
        self.encode_claims(&Claims::new(user_id, expiry_hours)?)
    }

    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        Ok(token_data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_to_same_user() {
        let verifier = JwtVerifier::new("secret").unwrap();
        let user = Uuid::new_v4();
        let token = verifier.issue(user, 1).unwrap();
        assert_eq!(verifier.verify(&token).unwrap(), user);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtVerifier::new("one").unwrap().issue(Uuid::new_v4(), 1).unwrap();
        let err = JwtVerifier::new("two").unwrap().verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let verifier = JwtVerifier::new("secret").unwrap();
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id: Uuid::new_v4(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = verifier.encode_claims(&claims).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn out_of_range_expiry_is_an_error() {
        let verifier = JwtVerifier::new("secret").unwrap();
        for hours in [99_999_999_999_999, u64::MAX] {
            let err = verifier.issue(Uuid::new_v4(), hours).unwrap_err();
            assert!(matches!(err, AuthError::TokenGeneration(_)), "{}", hours);
        }
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(JwtVerifier::new(""), Err(AuthError::InvalidSecret)));
    }
}
