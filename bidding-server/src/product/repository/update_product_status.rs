use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::ProductId,
        product::entities,
    },
};

impl Repository {
    pub async fn update_product_status(
        &self,
        product_id: ProductId,
        active: bool,
    ) -> Result<entities::Product, RestError> {
        let product = self.db.update_product_status(product_id, active).await?;
        Ok(product.get_product_entity())
    }
}
