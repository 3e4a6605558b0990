use {
    crate::{
        config::RunOptions,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        user::service as user_service,
    },
    anyhow::Result,
    axum::{
        http::StatusCode,
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
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

pub mod user;

#[derive(Clone, Debug, PartialEq)]
pub enum RestError {
    /// The request contained invalid parameters or violated a business rule.
    BadParameters(String),
    /// No user matches the requested token or search criteria.
    UserNotFound,
    /// Internal error occurred during processing the request.
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            RestError::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            RestError::BadParameters(_) => "INVREQ01",
            RestError::UserNotFound => "NOTFND01",
            RestError::TemporarilyUnavailable => "GENEX01",
        }
    }

    fn exception(&self) -> &'static str {
        match self {
            RestError::BadParameters(_) => "InvalidRequest",
            RestError::UserNotFound => "ResourceNotFound",
            RestError::TemporarilyUnavailable => "InternalError",
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
            cause:     None,
        };
        (status, Json(body)).into_response()
    }
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

pub struct ApiState {
    pub user_service: user_service::Service,
}

pub async fn start_api(run_options: RunOptions, state: Arc<ApiState>) -> Result<()> {
    #[derive(OpenApi)]
    #[openapi(
        paths(user::get_user, user::post_user, user::search_user),
        components(
            schemas(
                user::UserResponse,
                user::CreateUserRequest,
                user::SearchUserRequest,
                ApiErrorResponse,
            ),
            responses(ApiErrorResponse),
        ),
        tags(
            (name = "Users Server", description = "Manages identity records for the auction \
            platform. Tokens issued here identify callers towards the bidding service.")
        )
    )]
    struct ApiDoc;

    let routes = Router::new()
        .route("/user/:user_token", get(user::get_user))
        .route("/user", post(user::post_user))
        .route("/user/search", post(user::search_user));

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
