pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

// BookRepository is the capability callers and the catalog service depend on; the
// concrete store behind it is chosen by the factory.
pub trait BookRepository: Repository<BookEntity> {}
