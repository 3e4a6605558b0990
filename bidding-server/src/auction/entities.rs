use {
    crate::kernel::entities::{
        BidId,
        ProductId,
        UserToken,
    },
    std::{
        fmt::{
            Display,
            Formatter,
        },
        sync::Arc,
    },
    time::OffsetDateTime,
    tokio::sync::Mutex,
};

/// A recorded bid. Bids are append-only: once written they are never updated
/// or deleted.
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub id:         BidId,
    pub product_id: ProductId,
    pub bidder:     UserToken,
    pub price:      f64,
    pub timestamp:  OffsetDateTime,
}

impl Bid {
    /// Strict total order over the bids of one product: the higher price wins,
    /// ties are resolved in favor of the earlier bid. This is what makes
    /// concurrent writers produce a deterministic auction outcome.
    pub fn outranks(&self, other: &Bid) -> bool {
        self.price > other.price || (self.price == other.price && self.timestamp < other.timestamp)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RejectReason {
    NonPositivePrice,
    BelowFloorPrice,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NonPositivePrice => write!(f, "Bid amount should be greater than 0"),
            RejectReason::BelowFloorPrice => {
                write!(f, "Bid should be greater than or equal to the minimum bid price")
            }
        }
    }
}

/// Result of a bid placement. Rejection by a business rule is a normal
/// outcome, not an error: callers branch on the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum BidOutcome {
    Accepted(Bid),
    Rejected(RejectReason),
}

/// Derived result of closing an auction. Never persisted; `winner` and
/// `winning_bid` are both empty when the listing closed without interest.
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionOutcome {
    pub product_id:  ProductId,
    pub winner:      Option<UserToken>,
    pub winning_bid: Option<f64>,
}

pub type ProductLock = Arc<Mutex<()>>;
