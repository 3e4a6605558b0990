use {
    super::{
        BidCreate,
        Repository,
    },
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    /// Appends a bid to the ledger. The identifier and timestamp are assigned
    /// at write time and never change afterwards.
    pub async fn add_bid(&self, create: BidCreate) -> Result<entities::Bid, RestError> {
        let bid = self.db.add_bid(&create).await?;
        Ok(bid.get_bid_entity())
    }
}
