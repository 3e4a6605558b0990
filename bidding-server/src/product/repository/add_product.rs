use {
    super::Repository,
    crate::{
        api::RestError,
        product::entities,
    },
};

impl Repository {
    pub async fn add_product(
        &self,
        create: entities::CreateProduct,
    ) -> Result<entities::Product, RestError> {
        let product = self.db.add_product(&create).await?;
        Ok(product.get_product_entity())
    }
}
