//! Authentication and authorization

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::LecturerId;
use domain_claims::{Principal, Role};

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Display name
    pub name: String,
    /// User's roles
    pub roles: Vec<String>,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Unusable token claims: {0}")]
    InvalidClaims(String),
}

impl Claims {
    /// Converts token claims into a domain principal
    ///
    /// The subject must be a lecturer identifier and every role must parse;
    /// a token carrying an unknown role is rejected outright rather than
    /// silently narrowed.
    pub fn principal(&self) -> Result<Principal, AuthError> {
        let id: LecturerId = self
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidClaims(format!("Bad subject '{}'", self.sub)))?;

        let roles = self
            .roles
            .iter()
            .map(|r| {
                r.parse::<Role>()
                    .map_err(|_| AuthError::InvalidClaims(format!("Unknown role '{}'", r)))
            })
            .collect::<Result<Vec<Role>, AuthError>>()?;

        Ok(Principal::new(id, self.name.clone(), roles))
    }
}

/// Creates a new JWT token
pub fn create_token(
    user_id: &str,
    name: &str,
    roles: Vec<String>,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: user_id.to_string(),
        name: name.to_string(),
        roles,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            AuthError::TokenExpired
        } else {
            AuthError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}
