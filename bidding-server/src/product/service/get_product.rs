use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::ProductId,
        product::entities,
    },
};

pub struct GetProductInput {
    pub product_id: ProductId,
}

impl Service {
    pub async fn get_product(&self, input: GetProductInput) -> Result<entities::Product, RestError> {
        self.repo.get_product(input.product_id).await
    }
}
