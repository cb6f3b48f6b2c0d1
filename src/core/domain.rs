use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored entities
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the book store
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub store_id: String,
    pub seed_catalog: bool,
}

impl Configuration {
    pub fn new(store_id: &str) -> Self {
        Configuration {
            store_id: store_id.to_string(),
            seed_catalog: true,
        }
    }

    pub fn unseeded(store_id: &str) -> Self {
        Configuration {
            store_id: store_id.to_string(),
            seed_catalog: false,
        }
    }
}
