use {
    crate::{
        auction::service as auction_service,
        config::RunOptions,
        kernel::entities::UserToken,
        product::service as product_service,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
    },
    anyhow::Result,
    axum::{
        async_trait,
        extract::FromRequestParts,
        http::{
            request::Parts,
            StatusCode,
        },
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
            patch,
            post,
        },
        Json,
        Router,
    },
    serde::Serialize,
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tower_http::cors::CorsLayer,
    utoipa::{
        OpenApi,
        ToResponse,
        ToSchema,
    },
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

pub mod bid;
pub mod product;

pub const USER_TOKEN_HEADER: &str = "X-User-Token";

#[derive(Clone, Debug, PartialEq)]
pub enum RestError {
    /// The request contained invalid parameters or violated a business rule.
    BadParameters(String),
    /// The caller is not allowed to perform the requested operation.
    Unauthorized(String),
    /// No product with the requested id exists (or it is closed to the
    /// requested operation).
    ProductNotFound,
    /// The listing is already sold and its status can no longer change.
    SaleFinalized,
    /// The users service could not be reached or answered unexpectedly.
    DependencyFailure(String),
    /// Internal error occurred during processing the request.
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            RestError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            RestError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "Product with the specified id was not found".to_string(),
            ),
            RestError::SaleFinalized => (
                StatusCode::CONFLICT,
                "Listing is already sold and can no longer change".to_string(),
            ),
            RestError::DependencyFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error while getting user details".to_string(),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            RestError::BadParameters(_) => "INVREQ01",
            RestError::Unauthorized(_) => "UNAUTH01",
            RestError::ProductNotFound => "NOTFND01",
            RestError::SaleFinalized => "CONFLICT01",
            RestError::DependencyFailure(_) => "DEPEND01",
            RestError::TemporarilyUnavailable => "GENEX01",
        }
    }

    fn exception(&self) -> &'static str {
        match self {
            RestError::BadParameters(_) => "InvalidRequest",
            RestError::Unauthorized(_) => "AccessDenied",
            RestError::ProductNotFound => "ResourceNotFound",
            RestError::SaleFinalized => "SaleFinalized",
            RestError::DependencyFailure(_) => "DependencyFailure",
            RestError::TemporarilyUnavailable => "InternalError",
        }
    }

    fn cause(&self) -> Option<String> {
        match self {
            RestError::DependencyFailure(cause) => Some(cause.clone()),
            _ => None,
        }
    }
}

/// Wire shape of every error response.
#[derive(Clone, Serialize, ToResponse, ToSchema)]
#[response(description = "An error occurred processing the request")]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    status:    u16,
    code:      String,
    messages:  Vec<String>,
    exception: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cause:     Option<String>,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, message) = self.to_status_and_message();
        let body = ApiErrorResponse {
            status:    status.as_u16(),
            code:      self.code().to_string(),
            messages:  vec![message],
            exception: self.exception().to_string(),
            cause:     self.cause(),
        };
        (status, Json(body)).into_response()
    }
}

/// Caller identity taken from the `X-User-Token` header.
pub struct Auth {
    pub token: UserToken,
}

#[async_trait]
impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(USER_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                RestError::BadParameters(format!("Missing {} header", USER_TOKEN_HEADER))
            })?;
        Ok(Auth {
            token: token.to_string(),
        })
    }
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

pub struct ApiState {
    pub product_service: product_service::Service,
    pub auction_service: auction_service::Service,
}

pub async fn start_api(run_options: RunOptions, state: Arc<ApiState>) -> Result<()> {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            product::get_products,
            product::post_product,
            product::toggle_product_status,
            bid::place_bid,
            bid::sold_product,
        ),
        components(
            schemas(
                product::ProductResponse,
                product::ProductsResponse,
                product::NewProductRequest,
                product::ToggleProductStatusRequest,
                product::ProductStatus,
                product::ProductStatusResponse,
                bid::PlaceBidRequest,
                bid::BidResultStatus,
                bid::BidResult,
                bid::AuctionWinnerDetails,
                bid::BidWinner,
                ApiErrorResponse,
            ),
            responses(ApiErrorResponse),
        ),
        tags(
            (name = "Bidding Server", description = "Manages auction product listings, accepts \
            and records bids against them, and determines the winning bid when an author closes \
            an auction.")
        )
    )]
    struct ApiDoc;

    let routes = Router::new()
        .route("/products", get(product::get_products))
        .route("/product", post(product::post_product))
        .route("/product/:product_id", patch(product::toggle_product_status))
        .route("/product/:product_id/bid", post(bid::place_bid))
        .route("/product/:product_id/sold", post(bid::sold_product));

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url("/docs", ApiDoc::openapi()))
        .merge(routes)
        .route("/live", get(live))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    tracing::info!(
        listen_addr = run_options.server.listen_addr,
        "Starting HTTP server..."
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down HTTP server...");
        })
        .await?;
    Ok(())
}
