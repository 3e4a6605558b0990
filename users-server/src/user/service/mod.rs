use {
    super::repository::Repository,
    std::sync::Arc,
};

pub mod add_user;
pub mod get_user;
pub mod search_user;

pub struct ServiceInner {
    repo: Arc<Repository>,
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
    pub fn new(repo: Arc<Repository>) -> Self {
        Self(Arc::new(ServiceInner { repo }))
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::user::repository::MockDatabase,
    };

    impl Service {
        pub fn new_with_mocks(db: MockDatabase) -> Self {
            Service::new(Arc::new(Repository::new(db)))
        }
    }
}
