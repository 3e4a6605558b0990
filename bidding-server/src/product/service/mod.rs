use {
    super::repository::Repository,
    crate::user::client::UserValidator,
    std::sync::Arc,
};

pub mod add_product;
pub mod conclude_product;
pub mod get_product;
pub mod get_products;
pub mod toggle_product_status;

pub struct ServiceInner {
    repo:           Arc<Repository>,
    user_validator: Arc<dyn UserValidator>,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(repo: Arc<Repository>, user_validator: Arc<dyn UserValidator>) -> Self {
        Self(Arc::new(ServiceInner {
            repo,
            user_validator,
        }))
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::{
            product::repository::MockDatabase,
            user::client::MockUserValidator,
        },
    };

    impl Service {
        pub fn new_with_mocks(db: MockDatabase, user_validator: MockUserValidator) -> Self {
            Service::new(Arc::new(Repository::new(db)), Arc::new(user_validator))
        }
    }
}
