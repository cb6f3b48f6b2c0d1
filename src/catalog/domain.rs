pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;

// CatalogService mirrors the repository capability set one-for-one so callers depend
// on this contract rather than on a concrete store.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn get_all_books(&self) -> Vec<BookEntity>;
    async fn get_book_by_id(&self, id: i64) -> Option<BookEntity>;
    async fn add_book(&self, book: &BookEntity) -> BookEntity;
    async fn update_book(&self, book: &BookEntity) -> bool;
    async fn delete_book(&self, id: i64) -> bool;
}
