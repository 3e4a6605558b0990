mod add_user;
mod find_user;
mod get_user_by_token;
mod models;

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
