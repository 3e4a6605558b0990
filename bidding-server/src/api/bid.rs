use {
    crate::{
        api::{
            ApiErrorResponse,
            ApiState,
            Auth,
            RestError,
        },
        auction::{
            entities,
            service::{
                conclude_auction::ConcludeAuctionInput,
                place_bid::PlaceBidInput,
            },
        },
        kernel::entities::ProductId,
    },
    axum::{
        extract::{
            Path,
            State,
        },
        Json,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::sync::Arc,
    utoipa::ToSchema,
};

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct PlaceBidRequest {
    /// Offered price. Must be positive and at least the listing's start price
    /// for the bid to be accepted.
    #[schema(example = 2000.0)]
    pub price: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, PartialEq, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum BidResultStatus {
    Placed,
    Rejected,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct BidResult {
    pub status:  BidResultStatus,
    /// Reason the bid was rejected. Absent for placed bids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuctionWinnerDetails {
    pub winner:      Option<String>,
    pub winning_bid: Option<f64>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BidWinner {
    pub product_identifier: ProductId,
    pub winner_details:     AuctionWinnerDetails,
}

impl From<entities::AuctionOutcome> for BidWinner {
    fn from(outcome: entities::AuctionOutcome) -> Self {
        Self {
            product_identifier: outcome.product_id,
            winner_details:     AuctionWinnerDetails {
                winner:      outcome.winner,
                winning_bid: outcome.winning_bid,
            },
        }
    }
}

/// Place a bid on a listing.
///
/// A bid below the start price (or not positive) is answered with a REJECTED
/// status rather than an error; nothing is recorded for rejected bids.
#[utoipa::path(post, path = "/product/{product_id}/bid",
    params(("product_id" = i64, Path, description = "Id of the listing to bid on")),
    request_body = PlaceBidRequest,
    responses(
    (status = 200, description = "Outcome of the bid placement", body = BidResult),
    (status = 400, response = ApiErrorResponse),
    (status = 404, description = "Listing does not exist or is not open for bids", body = ApiErrorResponse),
),)]
pub async fn place_bid(
    State(state): State<Arc<ApiState>>,
    auth: Auth,
    Path(product_id): Path<ProductId>,
    Json(request): Json<PlaceBidRequest>,
) -> Result<Json<BidResult>, RestError> {
    let outcome = state
        .auction_service
        .place_bid(PlaceBidInput {
            bidder: auth.token,
            product_id,
            price: request.price,
        })
        .await?;
    Ok(Json(match outcome {
        entities::BidOutcome::Accepted(_) => BidResult {
            status:  BidResultStatus::Placed,
            message: None,
        },
        entities::BidOutcome::Rejected(reason) => BidResult {
            status:  BidResultStatus::Rejected,
            message: Some(reason.to_string()),
        },
    }))
}

/// Close the auction for a listing.
///
/// Only the listing's author may close it. The response carries the winning
/// bidder and price, or neither when no bids were placed.
#[utoipa::path(post, path = "/product/{product_id}/sold",
    params(("product_id" = i64, Path, description = "Id of the listing to close")),
    responses(
    (status = 200, description = "Auction outcome", body = BidWinner),
    (status = 401, description = "Caller is not the listing author", body = ApiErrorResponse),
    (status = 404, description = "Listing does not exist", body = ApiErrorResponse),
    (status = 409, description = "Listing is already sold", body = ApiErrorResponse),
),)]
pub async fn sold_product(
    State(state): State<Arc<ApiState>>,
    auth: Auth,
    Path(product_id): Path<ProductId>,
) -> Result<Json<BidWinner>, RestError> {
    let outcome = state
        .auction_service
        .conclude_auction(ConcludeAuctionInput {
            requester: auth.token,
            product_id,
        })
        .await?;
    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_result_omits_message_when_placed() {
        let value = serde_json::to_value(BidResult {
            status:  BidResultStatus::Placed,
            message: None,
        })
        .unwrap();
        assert_eq!(value["status"], "PLACED");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_bid_winner_wire_shape() {
        let value = serde_json::to_value(BidWinner {
            product_identifier: 3,
            winner_details:     AuctionWinnerDetails {
                winner:      Some("bidder-token".to_string()),
                winning_bid: Some(2000.0),
            },
        })
        .unwrap();
        assert_eq!(value["productIdentifier"], 3);
        assert_eq!(value["winnerDetails"]["winner"], "bidder-token");
        assert_eq!(value["winnerDetails"]["winningBid"], 2000.0);
    }
}
