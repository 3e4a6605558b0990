use {
    super::repository::Repository,
    crate::{
        product,
        user::client::UserValidator,
    },
    std::sync::Arc,
};

pub mod conclude_auction;
pub mod place_bid;

pub struct ServiceInner {
    repo:            Arc<Repository>,
    product_service: product::service::Service,
    user_validator:  Arc<dyn UserValidator>,
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
    pub fn new(
        repo: Arc<Repository>,
        product_service: product::service::Service,
        user_validator: Arc<dyn UserValidator>,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            repo,
            product_service,
            user_validator,
        }))
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::{
            auction::repository::MockDatabase,
            product::repository::MockDatabase as MockProductDatabase,
            user::client::MockUserValidator,
        },
    };

    impl Service {
        pub fn new_with_mocks(
            db: MockDatabase,
            product_db: MockProductDatabase,
            user_validator: MockUserValidator,
        ) -> Self {
            let user_validator: Arc<dyn UserValidator> = Arc::new(user_validator);
            let product_service = product::service::Service::new(
                Arc::new(product::repository::Repository::new(product_db)),
                user_validator.clone(),
            );
            Service::new(
                Arc::new(Repository::new(db)),
                product_service,
                user_validator,
            )
        }
    }
}
