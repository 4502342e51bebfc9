use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use super::model::AuthenticatedUser;
use crate::core::config::AuthConfig;
use crate::core::error::AppError;

/// Validates bearer tokens issued by the identity provider.
///
/// The provider owns sign-in, sign-up and credential handling; this service
/// only verifies the signature and standard claims, then reads the profile
/// and role claims out of the token.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    sub: String,
    #[serde(rename = "iss")]
    _iss: String,
    #[serde(rename = "aud")]
    _aud: AudienceClaim,
    #[serde(rename = "exp")]
    _exp: u64,

    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
}

/// Audience can be either a single string or an array of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum AudienceClaim {
    Single(String),
    Multiple(Vec<String>),
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.leeway = config.jwt_leeway.as_secs();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::HS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only HS256 is allowed",
                header.alg
            )));
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let claims = token_data.claims;

        Ok(AuthenticatedUser {
            sub: claims.sub,
            email: claims.email,
            name: claims.name,
            username: claims.username,
            roles: claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;
    use std::time::Duration;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        iss: String,
        aud: String,
        exp: u64,
        roles: Vec<String>,
        name: Option<String>,
    }

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: "https://id.example.com".to_string(),
            audience: "sponsorhub-api".to_string(),
            jwt_leeway: Duration::from_secs(30),
        }
    }

    fn sign(claims: &TestClaims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("token encoding")
    }

    fn future_exp() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock")
            .as_secs()
            + 3600
    }

    #[test]
    fn test_valid_token_yields_user() {
        let config = test_config();
        let validator = JwtValidator::new(&config);

        let token = sign(
            &TestClaims {
                sub: "user-1".to_string(),
                iss: config.issuer.clone(),
                aud: config.audience.clone(),
                exp: future_exp(),
                roles: vec!["admin".to_string()],
                name: Some("Ada".to_string()),
            },
            &config.jwt_secret,
        );

        let user = validator.validate_token(&token).expect("valid token");
        assert_eq!(user.sub, "user-1");
        assert!(user.is_admin());
        assert_eq!(user.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let config = test_config();
        let validator = JwtValidator::new(&config);

        let token = sign(
            &TestClaims {
                sub: "user-1".to_string(),
                iss: config.issuer.clone(),
                aud: "some-other-api".to_string(),
                exp: future_exp(),
                roles: vec![],
                name: None,
            },
            &config.jwt_secret,
        );

        assert!(validator.validate_token(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let validator = JwtValidator::new(&config);

        let token = sign(
            &TestClaims {
                sub: "user-1".to_string(),
                iss: config.issuer.clone(),
                aud: config.audience.clone(),
                exp: future_exp(),
                roles: vec![],
                name: None,
            },
            "not-the-secret",
        );

        assert!(validator.validate_token(&token).is_err());
    }
}
