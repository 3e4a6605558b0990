#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        auction::entities,
        kernel::{
            db::DB,
            entities::ProductId,
        },
    },
    axum::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
    time::{
        OffsetDateTime,
        PrimitiveDateTime,
        UtcOffset,
    },
};

/// Row of the `biding_list` table.
#[derive(Clone, FromRow, Debug)]
pub struct Biding {
    pub id:                i64,
    pub product_detail_id: i64,
    pub bider:             String,
    pub bid_price:         f64,
    pub timestamp:         PrimitiveDateTime,
}

impl Biding {
    pub fn get_bid_entity(&self) -> entities::Bid {
        entities::Bid {
            id:         self.id,
            product_id: self.product_detail_id,
            bidder:     self.bider.clone(),
            price:      self.bid_price,
            timestamp:  self.timestamp.assume_offset(UtcOffset::UTC),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BidCreate {
    pub product_id: ProductId,
    pub bidder:     String,
    pub price:      f64,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_bid(&self, create: &BidCreate) -> Result<Biding, RestError>;
    async fn get_bids_for_product(&self, product_id: ProductId) -> Result<Vec<Biding>, RestError>;
}

#[async_trait]
impl Database for DB {
    async fn add_bid(&self, create: &BidCreate) -> Result<Biding, RestError> {
        let now = OffsetDateTime::now_utc();
        sqlx::query_as::<_, Biding>(
            "INSERT INTO biding_list (product_detail_id, bider, bid_price, \"timestamp\") \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(create.product_id)
        .bind(&create.bidder)
        .bind(create.price)
        .bind(PrimitiveDateTime::new(now.date(), now.time()))
        .fetch_one(self)
        .await
        .map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                product_id = create.product_id,
                "DB: Failed to insert bid"
            );
            RestError::TemporarilyUnavailable
        })
    }

    async fn get_bids_for_product(&self, product_id: ProductId) -> Result<Vec<Biding>, RestError> {
        sqlx::query_as::<_, Biding>("SELECT * FROM biding_list WHERE product_detail_id = $1")
            .bind(product_id)
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    product_id = product_id,
                    "DB: Failed to get bids"
                );
                RestError::TemporarilyUnavailable
            })
    }
}
