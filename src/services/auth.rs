//! Authentication and principal lookup

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{Principal, UserClaims},
    repository::users::{UserDirectory, UsersRepository},
};

#[derive(Clone)]
pub struct AuthService<D = UsersRepository> {
    directory: D,
    config: AuthConfig,
}

impl<D: UserDirectory> AuthService<D> {
    pub fn new(directory: D, config: AuthConfig) -> Self {
        Self { directory, config }
    }

    /// Resolve the principal stored for an email. The match is exact and
    /// case sensitive; a miss names the unknown principal instead of a
    /// generic authentication failure.
    pub async fn load_user(&self, email: &str) -> AppResult<Principal> {
        let user = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::PrincipalNotFound(format!("No user with email {}", email)))?;

        Ok(user.into_principal())
    }

    /// Authenticate by email and password and return a signed JWT along
    /// with the principal it was issued for. Unknown emails and wrong
    /// passwords fail with the same message.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, Principal)> {
        let user = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        let user_id = user.id;
        let principal = user.into_principal();

        if !self.verify_password(&principal.password_hash, password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: principal.username.clone(),
            user_id,
            authorities: principal.authorities.clone(),
            exp,
            iat: now,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok((token, principal))
    }

    /// Verify a password against a stored Argon2 hash
    fn verify_password(&self, hash: &str, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}

impl AuthService<UsersRepository> {
    /// Seed the configured admin account when the users table is empty, so
    /// a fresh deployment can log in.
    pub async fn ensure_default_admin(&self) -> AppResult<()> {
        if self.directory.count().await? > 0 {
            return Ok(());
        }

        let hash = self.hash_password(&self.config.admin_password)?;
        let user = self
            .directory
            .insert_with_roles(
                "Default",
                "Admin",
                &self.config.admin_email,
                &hash,
                &["ROLE_USER", "ROLE_ADMIN"],
            )
            .await?;

        tracing::info!("Seeded default admin account {}", user.email);
        Ok(())
    }
}
