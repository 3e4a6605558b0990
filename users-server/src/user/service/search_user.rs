use {
    super::Service,
    crate::{
        api::RestError,
        user::entities,
    },
};

pub struct SearchUserInput {
    pub phone_number: Option<String>,
    pub email:        Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl Service {
    /// Finds a user by contact details. When both a phone number and an email
    /// are given, the record must match the pair.
    #[tracing::instrument(skip_all)]
    pub async fn search_user(&self, input: SearchUserInput) -> Result<entities::User, RestError> {
        let phone_number = non_blank(input.phone_number);
        let email = non_blank(input.email);

        let user = match (phone_number, email) {
            (Some(phone_number), Some(email)) => {
                self.repo
                    .find_user_by_phone_and_email(&phone_number, &email)
                    .await?
            }
            (Some(phone_number), None) => self.repo.find_user_by_phone(&phone_number).await?,
            (None, Some(email)) => self.repo.find_user_by_email(&email).await?,
            (None, None) => {
                return Err(RestError::BadParameters(
                    "Either a phone number or an email must be provided".to_string(),
                ))
            }
        };
        user.ok_or(RestError::UserNotFound)
    }
}
