mod add_product;
mod conclude_product;
mod get_product;
mod get_products;
mod models;
mod update_product_status;

pub use models::*;

#[derive(Debug)]
pub struct Repository {
    db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }
}
