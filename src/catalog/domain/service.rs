use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::repository::Repository;

// CatalogServiceImpl forwards every call unchanged to the injected repository; it adds
// no validation, translation or state of its own.
pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn get_all_books(&self) -> Vec<BookEntity> {
        self.book_repository.find_all().await
    }

    async fn get_book_by_id(&self, id: i64) -> Option<BookEntity> {
        self.book_repository.find_by_id(id).await
    }

    async fn add_book(&self, book: &BookEntity) -> BookEntity {
        self.book_repository.add(book).await
    }

    async fn update_book(&self, book: &BookEntity) -> bool {
        self.book_repository.update(book).await
    }

    async fn delete_book(&self, id: i64) -> bool {
        self.book_repository.delete(id).await
    }
}
