use {
    crate::{
        auction::entities,
        kernel::entities::ProductId,
    },
    std::collections::HashMap,
    tokio::sync::Mutex,
};

mod add_bid;
mod get_best_bid;
mod get_or_create_product_lock;
mod models;
mod remove_product_lock;

pub use models::*;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub product_locks: Mutex<HashMap<ProductId, entities::ProductLock>>,
}

#[derive(Debug)]
pub struct Repository {
    pub in_memory_store: InMemoryStore,
    db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self {
            in_memory_store: InMemoryStore::default(),
            db: Box::new(db),
        }
    }
}
