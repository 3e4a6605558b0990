use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::UserToken,
        product::entities,
    },
};

pub struct AddProductInput {
    pub author:      UserToken,
    pub name:        String,
    pub description: Option<String>,
    pub start_price: Option<f64>,
    pub active:      bool,
}

impl Service {
    #[tracing::instrument(skip_all, fields(author = %input.author))]
    pub async fn add_product(&self, input: AddProductInput) -> Result<entities::Product, RestError> {
        if input.name.trim().is_empty() {
            return Err(RestError::BadParameters(
                "Product name must not be empty".to_string(),
            ));
        }
        let start_price = input.start_price.ok_or_else(|| {
            RestError::BadParameters("Start price must be provided".to_string())
        })?;
        if start_price <= 0.0 {
            return Err(RestError::BadParameters(
                "Start price must be greater than 0".to_string(),
            ));
        }
        if !self.user_validator.validate_exists(&input.author).await? {
            return Err(RestError::BadParameters("User does not exist".to_string()));
        }

        let product = self
            .repo
            .add_product(entities::CreateProduct {
                name:        input.name,
                description: input.description,
                start_price,
                active:      input.active,
                author:      input.author,
            })
            .await?;
        tracing::info!(product_id = product.id, "Created product listing");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::product::repository::{
            MockDatabase,
            ProductDetail,
        },
        crate::user::client::MockUserValidator,
    };

    fn valid_input() -> AddProductInput {
        AddProductInput {
            author:      "author-token".to_string(),
            name:        "Walnut writing desk".to_string(),
            description: Some("Mid-century, lightly used".to_string()),
            start_price: Some(1000.0),
            active:      true,
        }
    }

    #[tokio::test]
    async fn test_add_product_rejects_missing_start_price() {
        let mut db = MockDatabase::new();
        db.expect_add_product().never();
        let service = Service::new_with_mocks(db, MockUserValidator::new());

        let result = service
            .add_product(AddProductInput {
                start_price: None,
                ..valid_input()
            })
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn test_add_product_rejects_non_positive_start_price() {
        for start_price in [0.0, -5.0] {
            let mut db = MockDatabase::new();
            db.expect_add_product().never();
            let service = Service::new_with_mocks(db, MockUserValidator::new());

            let result = service
                .add_product(AddProductInput {
                    start_price: Some(start_price),
                    ..valid_input()
                })
                .await;
            assert!(matches!(result, Err(RestError::BadParameters(_))));
        }
    }

    #[tokio::test]
    async fn test_add_product_rejects_blank_name() {
        let mut db = MockDatabase::new();
        db.expect_add_product().never();
        let service = Service::new_with_mocks(db, MockUserValidator::new());

        let result = service
            .add_product(AddProductInput {
                name: "   ".to_string(),
                ..valid_input()
            })
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn test_add_product_rejects_unknown_user() {
        let mut db = MockDatabase::new();
        db.expect_add_product().never();
        let mut user_validator = MockUserValidator::new();
        user_validator
            .expect_validate_exists()
            .returning(|_| Ok(false));
        let service = Service::new_with_mocks(db, user_validator);

        let result = service.add_product(valid_input()).await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn test_add_product_persists_valid_listing() {
        let mut db = MockDatabase::new();
        db.expect_add_product()
            .withf(|create| create.start_price == 1000.0 && !create.name.is_empty())
            .times(1)
            .returning(|create| {
                Ok(ProductDetail {
                    id:          1,
                    name:        create.name.clone(),
                    description: create.description.clone(),
                    start_price: create.start_price,
                    sold:        false,
                    sold_price:  None,
                    active:      create.active,
                    author:      create.author.clone(),
                })
            });
        let mut user_validator = MockUserValidator::new();
        user_validator
            .expect_validate_exists()
            .returning(|_| Ok(true));
        let service = Service::new_with_mocks(db, user_validator);

        let product = service.add_product(valid_input()).await.unwrap();
        assert_eq!(product.id, 1);
        assert!(!product.sold);
        assert_eq!(product.author, "author-token");
    }
}
