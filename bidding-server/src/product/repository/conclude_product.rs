use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::ProductId,
        product::entities,
    },
};

impl Repository {
    /// Marks the product sold and closed. `sold_price` is NULL when the
    /// auction ended without bids.
    pub async fn conclude_product(
        &self,
        product_id: ProductId,
        sold_price: Option<f64>,
    ) -> Result<entities::Product, RestError> {
        let product = self.db.conclude_product(product_id, sold_price).await?;
        Ok(product.get_product_entity())
    }
}
