use {
    crate::{
        api::{
            ApiErrorResponse,
            ApiState,
            Auth,
            RestError,
        },
        kernel::entities::ProductId,
        product::{
            entities,
            service::{
                add_product::AddProductInput,
                get_products::GetProductsInput,
                toggle_product_status::ToggleProductStatusInput,
            },
        },
    },
    axum::{
        extract::{
            Path,
            Query,
            State,
        },
        Json,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::sync::Arc,
    utoipa::{
        IntoParams,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[schema(example = 17)]
    pub id:          ProductId,
    #[schema(example = "Walnut writing desk")]
    pub name:        String,
    pub description: Option<String>,
    /// Minimum acceptable bid for this listing.
    #[schema(example = 1000.0)]
    pub start_price: f64,
    pub sold:        bool,
    pub sold_price:  Option<f64>,
    pub active:      bool,
    pub author:      String,
}

impl From<entities::Product> for ProductResponse {
    fn from(product: entities::Product) -> Self {
        Self {
            id:          product.id,
            name:        product.name,
            description: product.description,
            start_price: product.start_price,
            sold:        product.sold,
            sold_price:  product.sold_price,
            active:      product.active,
            author:      product.author,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductsResponse {
    pub products: Vec<ProductResponse>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRequest {
    #[schema(example = "Walnut writing desk")]
    pub name:        String,
    pub description: Option<String>,
    /// Minimum acceptable bid. Must be greater than 0.
    #[schema(example = 1000.0)]
    pub start_price: Option<f64>,
    /// Whether the listing is immediately open for bids.
    #[serde(default = "default_active")]
    pub active:      bool,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, IntoParams)]
pub struct GetProductsQueryParams {
    /// Include paused listings in the result.
    #[serde(default = "default_allow_inactive")]
    pub allow_inactive: bool,
}

fn default_allow_inactive() -> bool {
    true
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ToggleProductStatusRequest {
    pub active: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, PartialEq, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    Active,
    Inactive,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductStatusResponse {
    pub status: ProductStatus,
}

/// List product listings.
///
/// Returns every listing when `allow_inactive` is set, only listings open for
/// bids otherwise.
#[utoipa::path(get, path = "/products", params(GetProductsQueryParams), responses(
    (status = 200, description = "Product listings", body = ProductsResponse),
    (status = 400, response = ApiErrorResponse),
),)]
pub async fn get_products(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<GetProductsQueryParams>,
) -> Result<Json<ProductsResponse>, RestError> {
    let products = state
        .product_service
        .get_products(GetProductsInput {
            include_inactive: params.allow_inactive,
        })
        .await?;
    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

/// Create a product listing.
///
/// The caller, identified by the `X-User-Token` header, becomes the listing's
/// author.
#[utoipa::path(post, path = "/product", request_body = NewProductRequest, responses(
    (status = 200, description = "The created listing", body = ProductResponse),
    (status = 400, response = ApiErrorResponse),
),)]
pub async fn post_product(
    State(state): State<Arc<ApiState>>,
    auth: Auth,
    Json(request): Json<NewProductRequest>,
) -> Result<Json<ProductResponse>, RestError> {
    let product = state
        .product_service
        .add_product(AddProductInput {
            author:      auth.token,
            name:        request.name,
            description: request.description,
            start_price: request.start_price,
            active:      request.active,
        })
        .await?;
    Ok(Json(product.into()))
}

/// Pause or reopen a listing.
///
/// Only the listing's author may change the status, and a sold listing is
/// frozen.
#[utoipa::path(patch, path = "/product/{product_id}",
    params(("product_id" = i64, Path, description = "Id of the listing to update")),
    request_body = ToggleProductStatusRequest,
    responses(
    (status = 200, description = "Updated listing status", body = ProductStatusResponse),
    (status = 400, response = ApiErrorResponse),
    (status = 401, description = "Caller is not the listing author", body = ApiErrorResponse),
    (status = 409, description = "Listing is already sold", body = ApiErrorResponse),
),)]
pub async fn toggle_product_status(
    State(state): State<Arc<ApiState>>,
    auth: Auth,
    Path(product_id): Path<ProductId>,
    Json(request): Json<ToggleProductStatusRequest>,
) -> Result<Json<ProductStatusResponse>, RestError> {
    let product = state
        .product_service
        .toggle_product_status(ToggleProductStatusInput {
            actor: auth.token,
            product_id,
            active: request.active,
        })
        .await?;
    Ok(Json(ProductStatusResponse {
        status: if product.active {
            ProductStatus::Active
        } else {
            ProductStatus::Inactive
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_response_wire_shape() {
        let response = ProductResponse {
            id:          7,
            name:        "Walnut writing desk".to_string(),
            description: None,
            start_price: 1000.0,
            sold:        false,
            sold_price:  None,
            active:      true,
            author:      "author-token".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["startPrice"], 1000.0);
        assert_eq!(value["soldPrice"], serde_json::Value::Null);
        assert_eq!(value["author"], "author-token");
    }

    #[test]
    fn test_new_product_request_defaults_to_active() {
        let request: NewProductRequest =
            serde_json::from_str(r#"{"name": "Desk", "startPrice": 10.0}"#).unwrap();
        assert!(request.active);
        assert_eq!(request.start_price, Some(10.0));
    }

    #[test]
    fn test_product_status_serializes_uppercase() {
        let value = serde_json::to_value(ProductStatusResponse {
            status: ProductStatus::Inactive,
        })
        .unwrap();
        assert_eq!(value["status"], "INACTIVE");
    }
}
