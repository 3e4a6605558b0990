use {
    super::Service,
    crate::{
        api::RestError,
        user::entities,
    },
    uuid::Uuid,
};

pub struct GetUserInput {
    pub token: String,
}

impl Service {
    /// Looks up a user by token. A token that is not even a well-formed UUID
    /// cannot belong to any user, so it maps to the same not-found answer.
    pub async fn get_user(&self, input: GetUserInput) -> Result<entities::User, RestError> {
        let token = Uuid::parse_str(&input.token).map_err(|_| RestError::UserNotFound)?;
        self.repo.get_user_by_token(&token).await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::user::repository::{
            MockDatabase,
            UserRecord,
        },
    };

    #[tokio::test]
    async fn test_get_user_with_malformed_token_is_not_found() {
        let mut db = MockDatabase::new();
        db.expect_get_user_by_token().never();
        let service = Service::new_with_mocks(db);

        let result = service
            .get_user(GetUserInput {
                token: "not-a-uuid".to_string(),
            })
            .await;
        assert_eq!(result, Err(RestError::UserNotFound));
    }

    #[tokio::test]
    async fn test_get_user_returns_matching_record() {
        let token = Uuid::new_v4();
        let mut db = MockDatabase::new();
        db.expect_get_user_by_token().returning(|token| {
            Ok(UserRecord {
                id:                      1,
                token:                   *token,
                first_name:              "Ada".to_string(),
                last_name:               "Lovelace".to_string(),
                phone_number:            "+4915112345678".to_string(),
                email:                   "ada@example.com".to_string(),
                street:                  None,
                house_number:            None,
                city:                    None,
                pincode:                 None,
                address_additional_info: None,
                country:                 None,
            })
        });
        let service = Service::new_with_mocks(db);

        let user = service
            .get_user(GetUserInput {
                token: token.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.token, token);
    }
}
