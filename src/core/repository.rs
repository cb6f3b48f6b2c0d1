use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Repository defines the capability set every entity store must support. Absence and
// write failure are ordinary return values (None / false), never errors.
#[async_trait]
pub trait Repository<Entity: Identifiable>: Sync + Send {
    // returns every entity currently in the store, order unspecified
    async fn find_all(&self) -> Vec<Entity>;

    // gets an entity by id
    async fn find_by_id(&self, id: i64) -> Option<Entity>;

    // stores the entity under a freshly assigned id and returns the stored copy
    async fn add(&self, entity: &Entity) -> Entity;

    // replaces the stored entity with the same id wholesale
    async fn update(&self, entity: &Entity) -> bool;

    // removes the entity for the id if present
    async fn delete(&self, id: i64) -> bool;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    InMemory,
}
