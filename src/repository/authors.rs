//! Authors repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Author, repository::EntityRepository};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository for AuthorsRepository {
    type Entity = Author;

    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, description FROM authors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(authors)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, name, description FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(author)
    }

    async fn insert(&self, author: &Author) -> AppResult<Author> {
        let created = match author.id {
            Some(id) => {
                sqlx::query_as::<_, Author>(
                    r#"
                    INSERT INTO authors (id, name, description)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, description
                    "#,
                )
                .bind(id)
                .bind(&author.name)
                .bind(&author.description)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Author>(
                    r#"
                    INSERT INTO authors (name, description)
                    VALUES ($1, $2)
                    RETURNING id, name, description
                    "#,
                )
                .bind(&author.name)
                .bind(&author.description)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(created)
    }

    async fn update(&self, author: &Author) -> AppResult<Author> {
        let saved = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (id, name, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description
            RETURNING id, name, description
            "#,
        )
        .bind(author.id)
        .bind(&author.name)
        .bind(&author.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
