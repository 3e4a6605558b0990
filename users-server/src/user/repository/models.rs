#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        kernel::db::DB,
        user::entities,
    },
    axum::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
    uuid::Uuid,
};

/// Row of the `user_record` table.
#[derive(Clone, FromRow, Debug)]
#[allow(dead_code)]
pub struct UserRecord {
    pub id:                      i64,
    pub token:                   Uuid,
    pub first_name:              String,
    pub last_name:               String,
    pub phone_number:            String,
    pub email:                   String,
    pub street:                  Option<String>,
    pub house_number:            Option<String>,
    pub city:                    Option<String>,
    pub pincode:                 Option<i64>,
    pub address_additional_info: Option<String>,
    pub country:                 Option<String>,
}

impl UserRecord {
    pub fn get_user_entity(&self) -> entities::User {
        entities::User {
            token:                   self.token,
            first_name:              self.first_name.clone(),
            last_name:               self.last_name.clone(),
            phone_number:            self.phone_number.clone(),
            email:                   self.email.clone(),
            street:                  self.street.clone(),
            house_number:            self.house_number.clone(),
            city:                    self.city.clone(),
            pincode:                 self.pincode,
            additional_address_info: self.address_additional_info.clone(),
            country:                 self.country.clone(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_user(&self, create: &entities::CreateUser) -> Result<UserRecord, RestError>;
    async fn get_user_by_token(&self, token: &Uuid) -> Result<UserRecord, RestError>;
    async fn find_user_by_phone(&self, phone_number: &str)
        -> Result<Option<UserRecord>, RestError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, RestError>;
    async fn find_user_by_phone_and_email(
        &self,
        phone_number: &str,
        email: &str,
    ) -> Result<Option<UserRecord>, RestError>;
}

#[async_trait]
impl Database for DB {
    async fn add_user(&self, create: &entities::CreateUser) -> Result<UserRecord, RestError> {
        let token = Uuid::new_v4();
        sqlx::query_as::<_, UserRecord>(
            "INSERT INTO user_record (token, first_name, last_name, phone_number, email, street, \
             house_number, city, pincode, address_additional_info, country) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
        .bind(token)
        .bind(&create.first_name)
        .bind(&create.last_name)
        .bind(&create.phone_number)
        .bind(&create.email)
        .bind(&create.street)
        .bind(&create.house_number)
        .bind(&create.city)
        .bind(create.pincode)
        .bind(&create.additional_address_info)
        .bind(&create.country)
        .fetch_one(self)
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), "DB: Failed to insert user");
            RestError::TemporarilyUnavailable
        })
    }

    async fn get_user_by_token(&self, token: &Uuid) -> Result<UserRecord, RestError> {
        sqlx::query_as::<_, UserRecord>("SELECT * FROM user_record WHERE token = $1")
            .bind(token)
            .fetch_one(self)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RestError::UserNotFound,
                _ => {
                    tracing::error!(error = e.to_string(), "DB: Failed to get user by token");
                    RestError::TemporarilyUnavailable
                }
            })
    }

    async fn find_user_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<UserRecord>, RestError> {
        sqlx::query_as::<_, UserRecord>("SELECT * FROM user_record WHERE phone_number = $1")
            .bind(phone_number)
            .fetch_optional(self)
            .await
            .map_err(|e| {
                tracing::error!(error = e.to_string(), "DB: Failed to find user by phone");
                RestError::TemporarilyUnavailable
            })
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, RestError> {
        sqlx::query_as::<_, UserRecord>("SELECT * FROM user_record WHERE email = $1")
            .bind(email)
            .fetch_optional(self)
            .await
            .map_err(|e| {
                tracing::error!(error = e.to_string(), "DB: Failed to find user by email");
                RestError::TemporarilyUnavailable
            })
    }

    async fn find_user_by_phone_and_email(
        &self,
        phone_number: &str,
        email: &str,
    ) -> Result<Option<UserRecord>, RestError> {
        sqlx::query_as::<_, UserRecord>(
            "SELECT * FROM user_record WHERE phone_number = $1 AND email = $2",
        )
        .bind(phone_number)
        .bind(email)
        .fetch_optional(self)
        .await
        .map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                "DB: Failed to find user by phone and email"
            );
            RestError::TemporarilyUnavailable
        })
    }
}
