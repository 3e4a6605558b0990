use {
    super::Service,
    crate::{
        api::RestError,
        user::entities,
    },
};

pub struct AddUserInput {
    pub user: entities::CreateUser,
}

impl Service {
    #[tracing::instrument(skip_all)]
    pub async fn add_user(&self, input: AddUserInput) -> Result<entities::User, RestError> {
        let user = input.user;
        if user.first_name.trim().is_empty() || user.last_name.trim().is_empty() {
            return Err(RestError::BadParameters(
                "First name and last name must be provided".to_string(),
            ));
        }
        if user.phone_number.trim().is_empty() {
            return Err(RestError::BadParameters(
                "Phone number must be provided".to_string(),
            ));
        }
        if user.email.trim().is_empty() {
            return Err(RestError::BadParameters(
                "Email must be provided".to_string(),
            ));
        }

        if self
            .repo
            .find_user_by_phone(&user.phone_number)
            .await?
            .is_some()
        {
            tracing::warn!("Phone number already in use");
            return Err(RestError::BadParameters(
                "Phone number is already associated with an account".to_string(),
            ));
        }
        if self.repo.find_user_by_email(&user.email).await?.is_some() {
            tracing::warn!("Email already in use");
            return Err(RestError::BadParameters(
                "Email is already associated with an account".to_string(),
            ));
        }

        let user = self.repo.add_user(user).await?;
        tracing::info!(token = %user.token, "Created user record");
        Ok(user)
    }
}
