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

pub struct ConcludeProductInput {
    pub product_id:  ProductId,
    /// Winning bidder and price, or `None` when the auction ends without bids.
    pub winning_bid: Option<(UserToken, f64)>,
}

impl Service {
    /// Finalizes the sale of a listing: marks it sold, closes it for bids and
    /// records the winning price. Authorization is the caller's concern.
    pub async fn conclude_product(
        &self,
        input: ConcludeProductInput,
    ) -> Result<entities::Product, RestError> {
        let sold_price = input.winning_bid.as_ref().map(|(_, price)| *price);
        self.repo
            .conclude_product(input.product_id, sold_price)
            .await
    }
}
