use {
    super::Repository,
    crate::{
        api::RestError,
        product::entities,
    },
};

impl Repository {
    pub async fn get_products(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<entities::Product>, RestError> {
        let products = self.db.get_products(include_inactive).await?;
        Ok(products
            .iter()
            .map(|product| product.get_product_entity())
            .collect())
    }
}
