use {
    super::Service,
    crate::{
        api::RestError,
        product::entities,
    },
};

pub struct GetProductsInput {
    pub include_inactive: bool,
}

impl Service {
    pub async fn get_products(
        &self,
        input: GetProductsInput,
    ) -> Result<Vec<entities::Product>, RestError> {
        self.repo.get_products(input.include_inactive).await
    }
}
