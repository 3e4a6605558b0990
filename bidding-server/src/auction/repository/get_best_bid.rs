use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::ProductId,
    },
};

impl Repository {
    /// Returns the winning candidate for a product: the bid with the highest
    /// price, ties resolved in favor of the earliest timestamp. Empty when no
    /// bids were placed.
    pub async fn get_best_bid(
        &self,
        product_id: ProductId,
    ) -> Result<Option<entities::Bid>, RestError> {
        let bids = self.db.get_bids_for_product(product_id).await?;
        let mut best: Option<entities::Bid> = None;
        for bid in bids.iter().map(|bid| bid.get_bid_entity()) {
            match &best {
                Some(current) if !bid.outranks(current) => {}
                _ => best = Some(bid),
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::repository::{
            Biding,
            MockDatabase,
        },
        time::macros::datetime,
    };

    fn bid(id: i64, bider: &str, bid_price: f64, timestamp: time::PrimitiveDateTime) -> Biding {
        Biding {
            id,
            product_detail_id: 1,
            bider: bider.to_string(),
            bid_price,
            timestamp,
        }
    }

    #[tokio::test]
    async fn test_get_best_bid_empty_ledger() {
        let mut db = MockDatabase::new();
        db.expect_get_bids_for_product().returning(|_| Ok(vec![]));
        let repo = Repository::new(db);

        assert_eq!(repo.get_best_bid(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_best_bid_prefers_highest_price() {
        let mut db = MockDatabase::new();
        db.expect_get_bids_for_product().returning(|_| {
            Ok(vec![
                bid(1, "a", 100.0, datetime!(2024-06-10 10:00)),
                bid(2, "b", 150.0, datetime!(2024-06-10 10:01)),
                bid(3, "c", 120.0, datetime!(2024-06-10 10:02)),
            ])
        });
        let repo = Repository::new(db);

        let best = repo.get_best_bid(1).await.unwrap().unwrap();
        assert_eq!(best.bidder, "b");
        assert_eq!(best.price, 150.0);
    }

    #[tokio::test]
    async fn test_get_best_bid_breaks_price_ties_by_earliest_timestamp() {
        let mut db = MockDatabase::new();
        // Deliberately out of chronological order to make sure the result does
        // not depend on the fetch order.
        db.expect_get_bids_for_product().returning(|_| {
            Ok(vec![
                bid(3, "c", 150.0, datetime!(2024-06-10 10:02)),
                bid(1, "a", 100.0, datetime!(2024-06-10 10:00)),
                bid(2, "b", 150.0, datetime!(2024-06-10 10:01)),
            ])
        });
        let repo = Repository::new(db);

        let best = repo.get_best_bid(1).await.unwrap().unwrap();
        assert_eq!(best.bidder, "b");
        assert_eq!(best.price, 150.0);
    }
}
