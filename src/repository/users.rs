//! Users repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Role, User},
};

/// Account lookup seam consumed by the authentication service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Exact, case-sensitive email match; roles come loaded.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Number of accounts, checked by the startup bootstrap.
    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert an account and link it to the named roles, creating any role
    /// that does not exist yet. Runs in a single transaction.
    pub async fn insert_with_roles(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
        role_names: &[&str],
    ) -> AppResult<User> {
        let mut tx = self.pool.begin().await?;

        let user_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (first_name, last_name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await?;

        for name in role_names {
            let role_id = sqlx::query_scalar::<_, i64>(
                r#"
                INSERT INTO roles (name) VALUES ($1)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                "#,
            )
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;

            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
                .bind(user_id)
                .bind(role_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.find_by_email(email).await?.ok_or_else(|| {
            AppError::Internal(format!("User {} vanished right after insert", email))
        })
    }
}

#[async_trait]
impl UserDirectory for UsersRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let mut user = match user {
            Some(user) => user,
            None => return Ok(None),
        };

        user.roles = sqlx::query_as::<_, Role>(
            r#"
            SELECT r.id, r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(user.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(user))
    }
}
