#[cfg(test)]
use mockall::automock;
use {
    crate::api::RestError,
    anyhow::Result,
    axum::async_trait,
    serde::Deserialize,
    std::time::Duration,
};

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Existence and authorship oracle backed by the users service. User records
/// are never mutated from here.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserValidator: Send + Sync + 'static {
    /// True when the token belongs to a known user.
    async fn validate_exists(&self, token: &str) -> Result<bool, RestError>;

    /// True only when the lookup succeeds and the returned record's own token
    /// equals `author`. The caller-supplied author claim is never trusted
    /// directly.
    async fn validate_is_author(&self, token: &str, author: &str) -> Result<bool, RestError>;
}

/// Wire shape of a user record as served by the users service. Only the token
/// is inspected here; the rest of the record is carried for completeness.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UserResponse {
    pub user_token:              String,
    pub first_name:              String,
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

pub struct HttpUserClient {
    client:   reqwest::Client,
    base_url: String,
}

impl HttpUserClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
        Ok(Self { client, base_url })
    }

    /// Looks up a user by token. A missing user (404, or 400 for a malformed
    /// token) is `None`; any other failure is a dependency error, never
    /// "user invalid".
    async fn get_user(&self, token: &str) -> Result<Option<UserResponse>, RestError> {
        let url = format!("{}/user/{}", self.base_url.trim_end_matches('/'), token);
        let response = self.client.get(&url).send().await.map_err(|err| {
            tracing::error!(error = err.to_string(), "Failed to reach the users service");
            RestError::DependencyFailure(err.to_string())
        })?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let user = response.json::<UserResponse>().await.map_err(|err| {
                    tracing::error!(
                        error = err.to_string(),
                        "Failed to decode user record from the users service"
                    );
                    RestError::DependencyFailure(err.to_string())
                })?;
                Ok(Some(user))
            }
            reqwest::StatusCode::NOT_FOUND | reqwest::StatusCode::BAD_REQUEST => Ok(None),
            status => {
                tracing::error!(
                    status = status.as_u16(),
                    "Users service returned an unexpected status"
                );
                Err(RestError::DependencyFailure(format!(
                    "Users service responded with status {}",
                    status
                )))
            }
        }
    }
}

#[async_trait]
impl UserValidator for HttpUserClient {
    async fn validate_exists(&self, token: &str) -> Result<bool, RestError> {
        Ok(self.get_user(token).await?.is_some())
    }

    async fn validate_is_author(&self, token: &str, author: &str) -> Result<bool, RestError> {
        match self.get_user(token).await? {
            Some(user) => Ok(user.user_token == author),
            None => Ok(false),
        }
    }
}
