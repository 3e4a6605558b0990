use {
    super::Repository,
    crate::{
        api::RestError,
        user::entities,
    },
};

impl Repository {
    pub async fn find_user_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<entities::User>, RestError> {
        let user = self.db.find_user_by_phone(phone_number).await?;
        Ok(user.map(|user| user.get_user_entity()))
    }

    pub async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entities::User>, RestError> {
        let user = self.db.find_user_by_email(email).await?;
        Ok(user.map(|user| user.get_user_entity()))
    }

    pub async fn find_user_by_phone_and_email(
        &self,
        phone_number: &str,
        email: &str,
    ) -> Result<Option<entities::User>, RestError> {
        let user = self
            .db
            .find_user_by_phone_and_email(phone_number, email)
            .await?;
        Ok(user.map(|user| user.get_user_entity()))
    }
}
