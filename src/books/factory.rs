use tracing::debug;

use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::InMemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub async fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    debug!(store_id = config.store_id.as_str(), "creating book repository");
    match store {
        RepositoryStore::InMemory => {
            if config.seed_catalog {
                Box::new(InMemoryBookRepository::with_starter_catalog())
            } else {
                Box::new(InMemoryBookRepository::new())
            }
        }
    }
}
