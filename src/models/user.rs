//! User, role and principal models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Account row joined with its granted roles.
///
/// Users are provisioned out of band (seed migration or startup bootstrap);
/// there is no user CRUD surface.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[sqlx(skip)]
    pub roles: Vec<Role>,
}

/// Role row. `name` is the authority token handed out verbatim
/// (e.g. "ROLE_USER").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Authenticated identity handed to the session layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub username: String,
    pub password_hash: String,
    pub authorities: Vec<String>,
}

impl User {
    /// Map this account to the principal consumed by authentication.
    /// The username is the email; authorities carry the stored role names
    /// without any prefix transformation.
    pub fn into_principal(self) -> Principal {
        Principal {
            username: self.email,
            password_hash: self.password,
            authorities: self.roles.into_iter().map(|role| role.name).collect(),
        }
    }
}

/// JWT claims issued on login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: i64,
    pub authorities: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "Ada.Lovelace@example.org".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$AAAA".to_string(),
            roles: vec![
                Role { id: 1, name: "ROLE_USER".to_string() },
                Role { id: 2, name: "ROLE_ADMIN".to_string() },
            ],
        }
    }

    #[test]
    fn principal_uses_email_as_username() {
        let principal = sample_user().into_principal();
        assert_eq!(principal.username, "Ada.Lovelace@example.org");
    }

    #[test]
    fn principal_authorities_equal_role_names_verbatim() {
        let principal = sample_user().into_principal();
        assert_eq!(principal.authorities, vec!["ROLE_USER", "ROLE_ADMIN"]);
    }

    #[test]
    fn principal_carries_stored_hash_untouched() {
        let user = sample_user();
        let hash = user.password.clone();
        assert_eq!(user.into_principal().password_hash, hash);
    }

    #[test]
    fn claims_round_trip_through_token() {
        let claims = UserClaims {
            sub: "ada@example.org".to_string(),
            user_id: 7,
            authorities: vec!["ROLE_USER".to_string()],
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: chrono::Utc::now().timestamp(),
        };
        let token = claims.create_token("unit-test-secret").unwrap();
        let decoded = UserClaims::from_token(&token, "unit-test-secret").unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.user_id, 7);
        assert_eq!(decoded.authorities, claims.authorities);
    }

    #[test]
    fn claims_reject_wrong_secret() {
        let claims = UserClaims {
            sub: "ada@example.org".to_string(),
            user_id: 7,
            authorities: vec![],
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: chrono::Utc::now().timestamp(),
        };
        let token = claims.create_token("unit-test-secret").unwrap();
        assert!(UserClaims::from_token(&token, "other-secret").is_err());
    }
}
