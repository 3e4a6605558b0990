use {
    super::Repository,
    crate::{
        api::RestError,
        user::entities,
    },
};

impl Repository {
    /// Persists a new user. The token is generated at write time.
    pub async fn add_user(&self, create: entities::CreateUser) -> Result<entities::User, RestError> {
        let user = self.db.add_user(&create).await?;
        Ok(user.get_user_entity())
    }
}
