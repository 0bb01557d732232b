use crate::constant::ACCESS_TOKEN_TTL_SECONDS;
use crate::error::AuthError;
use anyhow::Context;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use models_bloodsuite::Role;

/// Key material for signing and verifying access tokens.
#[derive(Clone)]
pub struct JwtKeys {
    secret: String,
}

impl JwtKeys {
    pub fn new(secret: impl Into<String>) -> Self {
        JwtKeys {
            secret: secret.into(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct AccessClaims {
    /// The id of the user the token was issued to
    pub sub: i32,
    /// The email of the user
    pub email: String,
    /// The role the user acts under; route gates check against this
    pub role: Role,
    /// The issue time of the token
    pub iat: i64,
    /// The expiration time of the token
    pub exp: i64,
}

/// Signs a token for a freshly registered or logged-in user.
pub fn issue_access_token(
    user_id: i32,
    email: &str,
    role: Role,
    keys: &JwtKeys,
) -> Result<String, AuthError> {
    let now = chrono::Utc::now().timestamp();
    let claims = AccessClaims {
        sub: user_id,
        email: email.to_string(),
        role,
        iat: now,
        exp: now + ACCESS_TOKEN_TTL_SECONDS,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(keys.secret.as_bytes()),
    )
    .context("unable to sign access token")?;

    Ok(token)
}

/// Verifies a bearer token and returns its claims.
pub fn validate_access_token(token: &str, keys: &JwtKeys) -> Result<AccessClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    // Attempt to decode the token.
    let decoded = match decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(keys.secret.as_bytes()),
        &validation,
    ) {
        Ok(decoded) => decoded.claims,
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                return Err(AuthError::JwtExpired);
            }
            _ => {
                return Err(AuthError::JwtValidationFailed {
                    details: e.to_string(),
                });
            }
        },
    };

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_jwt(user_id: i32, role: Role, secret: &str, exp_offset: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = AccessClaims {
            sub: user_id,
            email: "test@bloodsuite.org".to_string(),
            role,
            iat: now,
            exp: now + exp_offset,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to create test JWT")
    }

    #[test]
    fn test_issue_and_validate_roundtrip() -> anyhow::Result<()> {
        let keys = JwtKeys::new("super_secret_key");

        let token = issue_access_token(7, "donor@bloodsuite.org", Role::Donor, &keys)?;
        let claims = validate_access_token(&token, &keys)?;

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "donor@bloodsuite.org");
        assert_eq!(claims.role, Role::Donor);
        assert!(claims.exp - claims.iat == ACCESS_TOKEN_TTL_SECONDS);

        Ok(())
    }

    #[test]
    fn test_validate_rejects_wrong_secret() {
        let keys = JwtKeys::new("super_secret_key");
        let token = create_test_jwt(1, Role::Admin, "a_different_secret", 3600);

        let err = validate_access_token(&token, &keys).unwrap_err();
        assert!(matches!(err, AuthError::JwtValidationFailed { .. }));
    }

    #[test]
    fn test_validate_rejects_expired_token() {
        let keys = JwtKeys::new("super_secret_key");
        let token = create_test_jwt(1, Role::Hospital, "super_secret_key", -10_000);

        let err = validate_access_token(&token, &keys).unwrap_err();
        assert_eq!(err.to_string(), "jwt is expired");
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let keys = JwtKeys::new("super_secret_key");

        let err = validate_access_token("not.a.jwt", &keys).unwrap_err();
        assert!(matches!(err, AuthError::JwtValidationFailed { .. }));
    }
}
