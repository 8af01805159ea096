//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::Book,
    repository::{EntityRepository, SearchRepository},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository for BooksRepository {
    type Entity = Book;

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, isbn, name, serial_name, description FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, isbn, name, serial_name, description FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn insert(&self, book: &Book) -> AppResult<Book> {
        // An explicit id is honored; a collision surfaces as a conflict.
        let created = match book.id {
            Some(id) => {
                sqlx::query_as::<_, Book>(
                    r#"
                    INSERT INTO books (id, isbn, name, serial_name, description)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id, isbn, name, serial_name, description
                    "#,
                )
                .bind(id)
                .bind(&book.isbn)
                .bind(&book.name)
                .bind(&book.serial_name)
                .bind(&book.description)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Book>(
                    r#"
                    INSERT INTO books (isbn, name, serial_name, description)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, isbn, name, serial_name, description
                    "#,
                )
                .bind(&book.isbn)
                .bind(&book.name)
                .bind(&book.serial_name)
                .bind(&book.description)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(created)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        let saved = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, isbn, name, serial_name, description)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                isbn = EXCLUDED.isbn,
                name = EXCLUDED.name,
                serial_name = EXCLUDED.serial_name,
                description = EXCLUDED.description
            RETURNING id, isbn, name, serial_name, description
            "#,
        )
        .bind(book.id)
        .bind(&book.isbn)
        .bind(&book.name)
        .bind(&book.serial_name)
        .bind(&book.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SearchRepository for BooksRepository {
    /// Case-insensitive substring match over the book name.
    async fn search(&self, keyword: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, isbn, name, serial_name, description FROM books \
             WHERE name ILIKE $1 ORDER BY id",
        )
        .bind(format!("%{}%", keyword))
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }
}
