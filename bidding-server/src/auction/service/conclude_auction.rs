use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::{
            ProductId,
            UserToken,
        },
        product::service::{
            conclude_product::ConcludeProductInput,
            get_product::GetProductInput,
        },
    },
};

#[derive(Clone, Debug)]
pub struct ConcludeAuctionInput {
    pub requester:  UserToken,
    pub product_id: ProductId,
}

impl Service {
    async fn conclude_auction_for_lock(
        &self,
        input: &ConcludeAuctionInput,
        lock: entities::ProductLock,
    ) -> Result<entities::AuctionOutcome, RestError> {
        let _lock = lock.lock().await;
        let product = self
            .product_service
            .get_product(GetProductInput {
                product_id: input.product_id,
            })
            .await?;
        if !product.is_author(&input.requester) {
            tracing::warn!(
                product_id = product.id,
                "Close denied: caller is not the listing author"
            );
            return Err(RestError::Unauthorized(
                "Auction can only be ended by the product author".to_string(),
            ));
        }
        if product.sold {
            return Err(RestError::SaleFinalized);
        }

        let best_bid = self.repo.get_best_bid(input.product_id).await?;
        self.product_service
            .conclude_product(ConcludeProductInput {
                product_id:  input.product_id,
                winning_bid: best_bid.as_ref().map(|bid| (bid.bidder.clone(), bid.price)),
            })
            .await?;
        tracing::info!(
            product_id = input.product_id,
            has_winner = best_bid.is_some(),
            "Closed auction"
        );
        // An auction closed without bids is a normal outcome: both fields stay
        // empty.
        Ok(entities::AuctionOutcome {
            product_id:  input.product_id,
            winner:      best_bid.as_ref().map(|bid| bid.bidder.clone()),
            winning_bid: best_bid.map(|bid| bid.price),
        })
    }

    #[tracing::instrument(skip_all, fields(product_id = input.product_id))]
    pub async fn conclude_auction(
        &self,
        input: ConcludeAuctionInput,
    ) -> Result<entities::AuctionOutcome, RestError> {
        let product_lock = self
            .repo
            .get_or_create_product_lock(input.product_id)
            .await;
        let result = self.conclude_auction_for_lock(&input, product_lock).await;
        self.repo.remove_product_lock(&input.product_id).await;
        result
    }
}
