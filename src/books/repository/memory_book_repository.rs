use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::repository::Repository;

// InMemoryBookRepository keeps the authoritative id-to-book mapping for the process
// lifetime. The mutex exists because the repository traits take &self and are shared
// across callers; every operation locks, mutates and returns without suspending.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Mutex<HashMap<i64, BookEntity>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }

    // seeds the catalog the store opens with
    pub fn with_starter_catalog() -> Self {
        let books = HashMap::from([
            (1, BookEntity::with_id(1, "1999", "George Orwell")),
            (2, BookEntity::with_id(2, "To Kill a Mockingbird", "Harper Lee")),
            (3, BookEntity::with_id(3, "The Great Gatsby", "F. Scott Fitzgerald")),
            (4, BookEntity::with_id(4, "Lord of the Flies", "William Golding")),
            (5, BookEntity::with_id(5, "Pride and Prejudice", "Jane Austen")),
        ]);
        Self {
            books: Mutex::new(books),
        }
    }

    fn books(&self) -> MutexGuard<'_, HashMap<i64, BookEntity>> {
        self.books.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Repository<BookEntity> for InMemoryBookRepository {
    async fn find_all(&self) -> Vec<BookEntity> {
        self.books().values().cloned().collect()
    }

    async fn find_by_id(&self, id: i64) -> Option<BookEntity> {
        self.books().get(&id).cloned()
    }

    async fn add(&self, entity: &BookEntity) -> BookEntity {
        let mut books = self.books();
        // any caller-supplied id is ignored; ids start at 1 when the map is empty
        let id = books.keys().max().map_or(1, |max| max + 1);
        let mut book = entity.clone();
        book.book_id = id;
        books.insert(id, book.clone());
        debug!(book_id = id, "added book");
        book
    }

    async fn update(&self, entity: &BookEntity) -> bool {
        let mut books = self.books();
        if books.contains_key(&entity.book_id) {
            books.insert(entity.book_id, entity.clone());
            debug!(book_id = entity.book_id, "updated book");
            true
        } else {
            false
        }
    }

    async fn delete(&self, id: i64) -> bool {
        let removed = self.books().remove(&id).is_some();
        if removed {
            debug!(book_id = id, "deleted book");
        }
        removed
    }
}

impl BookRepository for InMemoryBookRepository {}
