use {
    crate::{
        api::{
            ApiErrorResponse,
            ApiState,
            RestError,
        },
        user::{
            entities,
            service::{
                add_user::AddUserInput,
                get_user::GetUserInput,
                search_user::SearchUserInput,
            },
        },
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
    uuid::Uuid,
};

#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Token identifying this user towards the bidding service.
    #[schema(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub user_token:              Uuid,
    #[schema(example = "Ada")]
    pub first_name:              String,
    #[schema(example = "Lovelace")]
    pub last_name:               String,
    pub phone_number:            String,
    pub email:                   String,
    pub street:                  Option<String>,
    pub house_number:            Option<String>,
    pub city:                    Option<String>,
    pub pincode:                 Option<i64>,
    pub additional_address_info: Option<String>,
    pub country:                 Option<String>,
}

impl From<entities::User> for UserResponse {
    fn from(user: entities::User) -> Self {
        Self {
            user_token:              user.token,
            first_name:              user.first_name,
            last_name:               user.last_name,
            phone_number:            user.phone_number,
            email:                   user.email,
            street:                  user.street,
            house_number:            user.house_number,
            city:                    user.city,
            pincode:                 user.pincode,
            additional_address_info: user.additional_address_info,
            country:                 user.country,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "Ada")]
    pub first_name:              String,
    #[schema(example = "Lovelace")]
    pub last_name:               String,
    /// Must not already be associated with another account.
    pub phone_number:            String,
    /// Must not already be associated with another account.
    pub email:                   String,
    pub street:                  Option<String>,
    pub house_number:            Option<String>,
    pub city:                    Option<String>,
    pub pincode:                 Option<i64>,
    pub additional_address_info: Option<String>,
    pub country:                 Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchUserRequest {
    pub phone_number: Option<String>,
    pub email:        Option<String>,
}

/// Fetch a user record by token.
#[utoipa::path(get, path = "/user/{user_token}",
    params(("user_token" = String, Path, description = "Token identifying the user")),
    responses(
    (status = 200, description = "The matching user record", body = UserResponse),
    (status = 404, description = "No user with this token", body = ApiErrorResponse),
),)]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    Path(user_token): Path<String>,
) -> Result<Json<UserResponse>, RestError> {
    let user = state
        .user_service
        .get_user(GetUserInput { token: user_token })
        .await?;
    Ok(Json(user.into()))
}

/// Create a user record.
///
/// The user's token is generated server side and returned in the response.
#[utoipa::path(post, path = "/user", request_body = CreateUserRequest, responses(
    (status = 200, description = "The created user record", body = UserResponse),
    (status = 400, response = ApiErrorResponse),
),)]
pub async fn post_user(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, RestError> {
    let user = state
        .user_service
        .add_user(AddUserInput {
            user: entities::CreateUser {
                first_name:              request.first_name,
                last_name:               request.last_name,
                phone_number:            request.phone_number,
                email:                   request.email,
                street:                  request.street,
                house_number:            request.house_number,
                city:                    request.city,
                pincode:                 request.pincode,
                additional_address_info: request.additional_address_info,
                country:                 request.country,
            },
        })
        .await?;
    Ok(Json(user.into()))
}

/// Search for a user by contact details.
///
/// When both a phone number and an email are given the record must match both.
#[utoipa::path(post, path = "/user/search", request_body = SearchUserRequest, responses(
    (status = 200, description = "The matching user record", body = UserResponse),
    (status = 400, response = ApiErrorResponse),
    (status = 404, description = "No user matches the criteria", body = ApiErrorResponse),
),)]
pub async fn search_user(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SearchUserRequest>,
) -> Result<Json<UserResponse>, RestError> {
    let user = state
        .user_service
        .search_user(SearchUserInput {
            phone_number: request.phone_number,
            email:        request.email,
        })
        .await?;
    Ok(Json(user.into()))
}
