use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            ProductId,
            UserToken,
        },
        product::entities,
    },
};

pub struct ToggleProductStatusInput {
    pub actor:      UserToken,
    pub product_id: ProductId,
    pub active:     bool,
}

impl Service {
    /// Pauses or reopens a listing. A sold listing is frozen: its status can
    /// never change again.
    #[tracing::instrument(skip_all, fields(product_id = input.product_id))]
    pub async fn toggle_product_status(
        &self,
        input: ToggleProductStatusInput,
    ) -> Result<entities::Product, RestError> {
        let product = self.repo.get_product(input.product_id).await?;
        if !self
            .user_validator
            .validate_is_author(&input.actor, &product.author)
            .await?
        {
            tracing::warn!(product_id = product.id, "Status change denied: not the author");
            return Err(RestError::Unauthorized(
                "Only the product author can make these changes".to_string(),
            ));
        }
        if product.sold {
            return Err(RestError::SaleFinalized);
        }
        self.repo
            .update_product_status(input.product_id, input.active)
            .await
    }
}
