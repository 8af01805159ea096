//! Generic CRUD orchestration over the catalog repositories

use crate::{
    error::{AppError, AppResult},
    models::{Identified, Page},
    repository::{
        authors::AuthorsRepository, books::BooksRepository, categories::CategoriesRepository,
        publishers::PublishersRepository, EntityRepository, SearchRepository,
    },
};

pub type BookService = CrudService<BooksRepository>;
pub type AuthorService = CrudService<AuthorsRepository>;
pub type CategoryService = CrudService<CategoriesRepository>;
pub type PublisherService = CrudService<PublishersRepository>;

/// One service instance per catalog entity; persistence plugs in through
/// [`EntityRepository`].
///
/// Existence checks live here, not in the repositories: a mutation is only
/// issued for a row the service has just confirmed.
#[derive(Clone)]
pub struct CrudService<R> {
    repository: R,
    entity_name: &'static str,
}

impl<R: EntityRepository> CrudService<R> {
    pub fn new(repository: R, entity_name: &'static str) -> Self {
        Self {
            repository,
            entity_name,
        }
    }

    /// All rows, in stable storage order.
    pub async fn find_all(&self) -> AppResult<Vec<R::Entity>> {
        self.repository.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<R::Entity> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("{} with id {} not found", self.entity_name, id))
        })
    }

    /// Persist a new row; storage assigns the id when the payload has none.
    pub async fn create(&self, entity: &R::Entity) -> AppResult<R::Entity> {
        self.repository.insert(entity).await
    }

    /// Full replace by identity. The payload must carry its id; there is no
    /// partial-field merge.
    pub async fn update(&self, entity: &R::Entity) -> AppResult<R::Entity> {
        if entity.id().is_none() {
            return Err(AppError::Validation(format!(
                "{} update requires an id",
                self.entity_name
            )));
        }
        self.repository.update(entity).await
    }

    /// Confirms existence before deleting. A missing id fails NotFound and
    /// the underlying delete is never issued; referential conflicts from the
    /// delete itself propagate as-is.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.find_by_id(id).await?;
        self.repository.delete_by_id(id).await
    }

    /// Load the full collection and slice one page out of it in memory.
    /// The slice keeps `find_all` ordering and the total always reflects the
    /// unpaged collection size.
    pub async fn find_paginated(&self, page: usize, per_page: usize) -> AppResult<Page<R::Entity>> {
        let items = self.repository.find_all().await?;
        Ok(Page::from_collection(items, page, per_page))
    }
}

impl<R: SearchRepository> CrudService<R> {
    /// Substring search over names. A missing or empty keyword lists
    /// everything, in the same order as `find_all`.
    pub async fn search(&self, keyword: Option<&str>) -> AppResult<Vec<R::Entity>> {
        match keyword {
            Some(keyword) if !keyword.is_empty() => self.repository.search(keyword).await,
            _ => self.repository.find_all().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;
    use crate::models::Book;

    mock! {
        BooksRepo {}

        #[async_trait]
        impl EntityRepository for BooksRepo {
            type Entity = Book;

            async fn find_all(&self) -> AppResult<Vec<Book>>;
            async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;
            async fn insert(&self, entity: &Book) -> AppResult<Book>;
            async fn update(&self, entity: &Book) -> AppResult<Book>;
            async fn delete_by_id(&self, id: i64) -> AppResult<()>;
        }

        #[async_trait]
        impl SearchRepository for BooksRepo {
            async fn search(&self, keyword: &str) -> AppResult<Vec<Book>>;
        }
    }

    fn book(id: i64, name: &str) -> Book {
        Book {
            id: Some(id),
            isbn: format!("978-0-00-{:06}-0", id),
            name: name.to_string(),
            serial_name: None,
            description: None,
        }
    }

    fn shelf(count: i64) -> Vec<Book> {
        (1..=count).map(|i| book(i, &format!("Book {}", i))).collect()
    }

    fn service(repo: MockBooksRepo) -> CrudService<MockBooksRepo> {
        CrudService::new(repo, "Book")
    }

    #[tokio::test]
    async fn find_all_returns_repository_rows() {
        let mut repo = MockBooksRepo::new();
        repo.expect_find_all().returning(|| Ok(shelf(3)));

        let books = service(repo).find_all().await.unwrap();
        assert_eq!(books.len(), 3);
        assert_eq!(books[0].name, "Book 1");
    }

    #[tokio::test]
    async fn find_by_id_returns_the_row() {
        let mut repo = MockBooksRepo::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(book(1, "Dune"))));

        let found = service(repo).find_by_id(1).await.unwrap();
        assert_eq!(found.name, "Dune");
    }

    #[tokio::test]
    async fn find_by_id_maps_missing_row_to_not_found() {
        let mut repo = MockBooksRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let err = service(repo).find_by_id(99).await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Book with id 99 not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_delegates_to_insert() {
        let mut repo = MockBooksRepo::new();
        repo.expect_insert()
            .withf(|b| b.id.is_none() && b.name == "Dune")
            .returning(|b| {
                let mut created = b.clone();
                created.id = Some(1);
                Ok(created)
            });

        let payload = Book {
            id: None,
            isbn: "978-0-441-17271-9".to_string(),
            name: "Dune".to_string(),
            serial_name: Some("Dune Chronicles".to_string()),
            description: None,
        };
        let created = service(repo).create(&payload).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn update_replaces_the_full_row() {
        let mut repo = MockBooksRepo::new();
        repo.expect_update()
            .withf(|b| b.id == Some(4) && b.name == "Updated Book")
            .returning(|b| Ok(b.clone()));

        let saved = service(repo).update(&book(4, "Updated Book")).await.unwrap();
        assert_eq!(saved.id, Some(4));
    }

    #[tokio::test]
    async fn update_without_id_is_rejected_before_storage() {
        let mut repo = MockBooksRepo::new();
        repo.expect_update().never();

        let mut payload = book(1, "Dune");
        payload.id = None;
        let err = service(repo).update(&payload).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_checks_existence_then_deletes() {
        let mut repo = MockBooksRepo::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(book(1, "Dune"))));
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        service(repo).delete(1).await.unwrap();
    }

    #[tokio::test]
    async fn delete_missing_id_never_issues_the_delete() {
        let mut repo = MockBooksRepo::new();
        repo.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));
        repo.expect_delete_by_id().never();

        let err = service(repo).delete(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn paginated_middle_page_slices_find_all_order() {
        let mut repo = MockBooksRepo::new();
        repo.expect_find_all().returning(|| Ok(shelf(10)));

        let page = service(repo).find_paginated(1, 3).await.unwrap();
        let names: Vec<&str> = page.content.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Book 4", "Book 5", "Book 6"]);
        assert_eq!(page.total_elements, 10);
    }

    #[tokio::test]
    async fn paginated_offset_past_end_is_empty_but_counted() {
        let mut repo = MockBooksRepo::new();
        repo.expect_find_all().returning(|| Ok(shelf(5)));

        let page = service(repo).find_paginated(3, 5).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 5);
    }

    #[tokio::test]
    async fn search_with_keyword_delegates_to_repository() {
        let mut repo = MockBooksRepo::new();
        repo.expect_search()
            .withf(|keyword| keyword == "dune")
            .returning(|_| Ok(vec![book(1, "Dune")]));
        repo.expect_find_all().never();

        let hits = service(repo).search(Some("dune")).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn search_without_keyword_behaves_like_find_all() {
        let mut repo = MockBooksRepo::new();
        repo.expect_find_all().returning(|| Ok(shelf(4)));
        repo.expect_search().never();

        let hits = service(repo).search(None).await.unwrap();
        assert_eq!(hits.len(), 4);
        assert_eq!(hits[0].name, "Book 1");
    }

    #[tokio::test]
    async fn search_with_empty_keyword_behaves_like_find_all() {
        let mut repo = MockBooksRepo::new();
        repo.expect_find_all().returning(|| Ok(shelf(2)));
        repo.expect_search().never();

        let hits = service(repo).search(Some("")).await.unwrap();
        assert_eq!(hits.len(), 2);
    }
}
