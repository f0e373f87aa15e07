use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use rand::rngs::OsRng;
use serde_derive::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::errors::ServerError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
}

pub fn hash_password(password: &str) -> Result<String, ServerError> {
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &SaltString::generate(&mut OsRng))?
        .to_string())
}

/// False for a wrong password; an unparsable stored hash is an error.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, ServerError> {
    let parsed_hash = PasswordHash::new(password_hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

pub fn issue_access_token(
    username: &str,
    secret: &str,
    ttl: Duration,
) -> Result<String, ServerError> {
    let exp = SystemTime::now()
        .checked_add(ttl)
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .ok_or(ServerError::JWTError)?
        .as_secs();

    Ok(encode(
        &Header::default(),
        &Claims {
            sub: username.to_owned(),
            exp,
        },
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    #[test]
    fn verifies_only_the_hashed_password() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert_eq!(
            verify_password("x", "not a phc string"),
            Err(ServerError::HashError)
        );
    }

    #[test]
    fn access_token_names_the_user() {
        let token = issue_access_token("dan", "s3cret", Duration::from_secs(60)).unwrap();
        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"s3cret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims.sub, "dan");
    }
}
