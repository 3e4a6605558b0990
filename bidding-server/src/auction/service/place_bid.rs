use {
    super::Service,
    crate::{
        api::RestError,
        auction::{
            entities,
            repository::BidCreate,
        },
        kernel::entities::{
            ProductId,
            UserToken,
        },
        product::service::get_product::GetProductInput,
    },
};

#[derive(Clone, Debug)]
pub struct PlaceBidInput {
    pub bidder:     UserToken,
    pub product_id: ProductId,
    pub price:      f64,
}

impl Service {
    async fn place_bid_for_lock(
        &self,
        input: &PlaceBidInput,
        lock: entities::ProductLock,
    ) -> Result<entities::BidOutcome, RestError> {
        let _lock = lock.lock().await;
        let product = self
            .product_service
            .get_product(GetProductInput {
                product_id: input.product_id,
            })
            .await?;
        // A paused or closed listing cannot receive bids and is reported the
        // same way as a missing one.
        if !product.active {
            return Err(RestError::ProductNotFound);
        }
        // Checked before the users service lookup: the request is rejected
        // regardless of what the lookup would say.
        if product.is_author(&input.bidder) {
            tracing::warn!(
                product_id = product.id,
                "Author attempted to bid on own listing"
            );
            return Err(RestError::BadParameters(
                "Author is not allowed to place a bid".to_string(),
            ));
        }
        if !self.user_validator.validate_exists(&input.bidder).await? {
            return Err(RestError::BadParameters("User does not exist".to_string()));
        }
        if input.price <= 0.0 {
            return Ok(entities::BidOutcome::Rejected(
                entities::RejectReason::NonPositivePrice,
            ));
        }
        if input.price < product.start_price {
            return Ok(entities::BidOutcome::Rejected(
                entities::RejectReason::BelowFloorPrice,
            ));
        }

        let bid = self
            .repo
            .add_bid(BidCreate {
                product_id: input.product_id,
                bidder:     input.bidder.clone(),
                price:      input.price,
            })
            .await?;
        tracing::info!(bid_id = bid.id, product_id = bid.product_id, "Recorded bid");
        Ok(entities::BidOutcome::Accepted(bid))
    }

    #[tracing::instrument(skip_all, fields(product_id = input.product_id))]
    pub async fn place_bid(&self, input: PlaceBidInput) -> Result<entities::BidOutcome, RestError> {
        let product_lock = self
            .repo
            .get_or_create_product_lock(input.product_id)
            .await;
        let result = self.place_bid_for_lock(&input, product_lock).await;
        self.repo.remove_product_lock(&input.product_id).await;
        result
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::repository::{
                Biding,
                MockDatabase,
            },
            product::repository::{
                MockDatabase as MockProductDatabase,
                ProductDetail,
            },
            user::client::MockUserValidator,
        },
        time::macros::datetime,
    };

    const AUTHOR: &str = "author-token";
    const BIDDER: &str = "bidder-token";

    fn open_listing() -> ProductDetail {
        ProductDetail {
            id:          1,
            name:        "Walnut writing desk".to_string(),
            description: None,
            start_price: 1000.0,
            sold:        false,
            sold_price:  None,
            active:      true,
            author:      AUTHOR.to_string(),
        }
    }

    fn input(bidder: &str, price: f64) -> PlaceBidInput {
        PlaceBidInput {
            bidder: bidder.to_string(),
            product_id: 1,
            price,
        }
    }

    #[tokio::test]
    async fn test_non_positive_price_is_rejected_without_ledger_write() {
        for price in [0.0, -1.0, -250.0] {
            let mut db = MockDatabase::new();
            db.expect_add_bid().never();
            let mut product_db = MockProductDatabase::new();
            product_db
                .expect_get_product()
                .returning(|_| Ok(open_listing()));
            let mut user_validator = MockUserValidator::new();
            user_validator
                .expect_validate_exists()
                .returning(|_| Ok(true));
            let service = Service::new_with_mocks(db, product_db, user_validator);

            let outcome = service.place_bid(input(BIDDER, price)).await.unwrap();
            assert_eq!(
                outcome,
                entities::BidOutcome::Rejected(entities::RejectReason::NonPositivePrice)
            );
        }
    }

    #[tokio::test]
    async fn test_bid_below_floor_price_is_rejected() {
        let mut db = MockDatabase::new();
        db.expect_add_bid().never();
        let mut product_db = MockProductDatabase::new();
        product_db
            .expect_get_product()
            .returning(|_| Ok(open_listing()));
        let mut user_validator = MockUserValidator::new();
        user_validator
            .expect_validate_exists()
            .returning(|_| Ok(true));
        let service = Service::new_with_mocks(db, product_db, user_validator);

        let outcome = service.place_bid(input(BIDDER, 999.99)).await.unwrap();
        assert_eq!(
            outcome,
            entities::BidOutcome::Rejected(entities::RejectReason::BelowFloorPrice)
        );
    }

    #[tokio::test]
    async fn test_valid_bid_is_recorded_once() {
        let mut db = MockDatabase::new();
        db.expect_add_bid()
            .withf(|create| create.price == 2000.0 && create.bidder == BIDDER)
            .times(1)
            .returning(|create| {
                Ok(Biding {
                    id:                7,
                    product_detail_id: create.product_id,
                    bider:             create.bidder.clone(),
                    bid_price:         create.price,
                    timestamp:         datetime!(2024-06-10 10:00),
                })
            });
        let mut product_db = MockProductDatabase::new();
        product_db
            .expect_get_product()
            .returning(|_| Ok(open_listing()));
        let mut user_validator = MockUserValidator::new();
        user_validator
            .expect_validate_exists()
            .returning(|_| Ok(true));
        let service = Service::new_with_mocks(db, product_db, user_validator);

        let outcome = service.place_bid(input(BIDDER, 2000.0)).await.unwrap();
        match outcome {
            entities::BidOutcome::Accepted(bid) => {
                assert_eq!(bid.id, 7);
                assert_eq!(bid.bidder, BIDDER);
                assert_eq!(bid.price, 2000.0);
            }
            entities::BidOutcome::Rejected(reason) => panic!("bid rejected: {}", reason),
        }
    }

    #[tokio::test]
    async fn test_bid_at_floor_price_is_accepted() {
        let mut db = MockDatabase::new();
        db.expect_add_bid().times(1).returning(|create| {
            Ok(Biding {
                id:                1,
                product_detail_id: create.product_id,
                bider:             create.bidder.clone(),
                bid_price:         create.price,
                timestamp:         datetime!(2024-06-10 10:00),
            })
        });
        let mut product_db = MockProductDatabase::new();
        product_db
            .expect_get_product()
            .returning(|_| Ok(open_listing()));
        let mut user_validator = MockUserValidator::new();
        user_validator
            .expect_validate_exists()
            .returning(|_| Ok(true));
        let service = Service::new_with_mocks(db, product_db, user_validator);

        let outcome = service.place_bid(input(BIDDER, 1000.0)).await.unwrap();
        assert!(matches!(outcome, entities::BidOutcome::Accepted(_)));
    }

    #[tokio::test]
    async fn test_author_cannot_bid_on_own_listing() {
        for price in [1.0, 1000.0, 5000.0] {
            let mut db = MockDatabase::new();
            db.expect_add_bid().never();
            let mut product_db = MockProductDatabase::new();
            product_db
                .expect_get_product()
                .returning(|_| Ok(open_listing()));
            // The author check precedes the users service lookup.
            let mut user_validator = MockUserValidator::new();
            user_validator.expect_validate_exists().never();
            let service = Service::new_with_mocks(db, product_db, user_validator);

            let result = service.place_bid(input(AUTHOR, price)).await;
            assert!(matches!(result, Err(RestError::BadParameters(_))));
        }
    }

    #[tokio::test]
    async fn test_inactive_listing_cannot_receive_bids() {
        let mut db = MockDatabase::new();
        db.expect_add_bid().never();
        let mut product_db = MockProductDatabase::new();
        product_db.expect_get_product().returning(|_| {
            Ok(ProductDetail {
                active: false,
                ..open_listing()
            })
        });
        let service = Service::new_with_mocks(db, product_db, MockUserValidator::new());

        let result = service.place_bid(input(BIDDER, 2000.0)).await;
        assert_eq!(result, Err(RestError::ProductNotFound));
    }

    #[tokio::test]
    async fn test_missing_listing_cannot_receive_bids() {
        let mut db = MockDatabase::new();
        db.expect_add_bid().never();
        let mut product_db = MockProductDatabase::new();
        product_db
            .expect_get_product()
            .returning(|_| Err(RestError::ProductNotFound));
        let service = Service::new_with_mocks(db, product_db, MockUserValidator::new());

        let result = service.place_bid(input(BIDDER, 2000.0)).await;
        assert_eq!(result, Err(RestError::ProductNotFound));
    }

    #[tokio::test]
    async fn test_unknown_bidder_is_rejected() {
        let mut db = MockDatabase::new();
        db.expect_add_bid().never();
        let mut product_db = MockProductDatabase::new();
        product_db
            .expect_get_product()
            .returning(|_| Ok(open_listing()));
        let mut user_validator = MockUserValidator::new();
        user_validator
            .expect_validate_exists()
            .returning(|_| Ok(false));
        let service = Service::new_with_mocks(db, product_db, user_validator);

        let result = service.place_bid(input(BIDDER, 2000.0)).await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn test_identity_service_failure_propagates() {
        let mut db = MockDatabase::new();
        db.expect_add_bid().never();
        let mut product_db = MockProductDatabase::new();
        product_db
            .expect_get_product()
            .returning(|_| Ok(open_listing()));
        let mut user_validator = MockUserValidator::new();
        user_validator
            .expect_validate_exists()
            .returning(|_| Err(RestError::DependencyFailure("connection refused".to_string())));
        let service = Service::new_with_mocks(db, product_db, user_validator);

        let result = service.place_bid(input(BIDDER, 2000.0)).await;
        assert!(matches!(result, Err(RestError::DependencyFailure(_))));
    }
}
