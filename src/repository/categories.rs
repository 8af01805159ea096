//! Categories repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Category, repository::EntityRepository};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository for CategoriesRepository {
    type Entity = Category;

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(category)
    }

    async fn insert(&self, category: &Category) -> AppResult<Category> {
        let created = match category.id {
            Some(id) => {
                sqlx::query_as::<_, Category>(
                    "INSERT INTO categories (id, name) VALUES ($1, $2) RETURNING id, name",
                )
                .bind(id)
                .bind(&category.name)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Category>(
                    "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
                )
                .bind(&category.name)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(created)
    }

    async fn update(&self, category: &Category) -> AppResult<Category> {
        let saved = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    /// Fails with a conflict while books still reference the category.
    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
