use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::ProductId,
        product::entities,
    },
};

impl Repository {
    pub async fn get_product(&self, product_id: ProductId) -> Result<entities::Product, RestError> {
        let product = self.db.get_product(product_id).await?;
        Ok(product.get_product_entity())
    }
}
