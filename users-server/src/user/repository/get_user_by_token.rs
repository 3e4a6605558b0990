use {
    super::Repository,
    crate::{
        api::RestError,
        user::entities,
    },
    uuid::Uuid,
};

impl Repository {
    pub async fn get_user_by_token(&self, token: &Uuid) -> Result<entities::User, RestError> {
        let user = self.db.get_user_by_token(token).await?;
        Ok(user.get_user_entity())
    }
}
