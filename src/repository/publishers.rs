//! Publishers repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Publisher, repository::EntityRepository};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository for PublishersRepository {
    type Entity = Publisher;

    async fn find_all(&self) -> AppResult<Vec<Publisher>> {
        let publishers =
            sqlx::query_as::<_, Publisher>("SELECT id, name FROM publishers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(publishers)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Publisher>> {
        let publisher =
            sqlx::query_as::<_, Publisher>("SELECT id, name FROM publishers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(publisher)
    }

    async fn insert(&self, publisher: &Publisher) -> AppResult<Publisher> {
        let created = match publisher.id {
            Some(id) => {
                sqlx::query_as::<_, Publisher>(
                    "INSERT INTO publishers (id, name) VALUES ($1, $2) RETURNING id, name",
                )
                .bind(id)
                .bind(&publisher.name)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Publisher>(
                    "INSERT INTO publishers (name) VALUES ($1) RETURNING id, name",
                )
                .bind(&publisher.name)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(created)
    }

    async fn update(&self, publisher: &Publisher) -> AppResult<Publisher> {
        let saved = sqlx::query_as::<_, Publisher>(
            r#"
            INSERT INTO publishers (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
        )
        .bind(publisher.id)
        .bind(&publisher.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM publishers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
