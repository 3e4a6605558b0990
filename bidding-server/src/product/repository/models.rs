#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        kernel::{
            db::DB,
            entities::ProductId,
        },
        product::entities,
    },
    axum::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
};

/// Row of the `product_detail` table.
#[derive(Clone, FromRow, Debug)]
pub struct ProductDetail {
    pub id:          i64,
    pub name:        String,
    pub description: Option<String>,
    pub start_price: f64,
    pub sold:        bool,
    pub sold_price:  Option<f64>,
    pub active:      bool,
    pub author:      String,
}

impl ProductDetail {
    pub fn get_product_entity(&self) -> entities::Product {
        entities::Product {
            id:          self.id,
            name:        self.name.clone(),
            description: self.description.clone(),
            start_price: self.start_price,
            sold:        self.sold,
            sold_price:  self.sold_price,
            active:      self.active,
            author:      self.author.clone(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_product(&self, create: &entities::CreateProduct)
        -> Result<ProductDetail, RestError>;
    async fn get_product(&self, product_id: ProductId) -> Result<ProductDetail, RestError>;
    async fn get_products(&self, include_inactive: bool) -> Result<Vec<ProductDetail>, RestError>;
    async fn update_product_status(
        &self,
        product_id: ProductId,
        active: bool,
    ) -> Result<ProductDetail, RestError>;
    async fn conclude_product(
        &self,
        product_id: ProductId,
        sold_price: Option<f64>,
    ) -> Result<ProductDetail, RestError>;
}

#[async_trait]
impl Database for DB {
    async fn add_product(
        &self,
        create: &entities::CreateProduct,
    ) -> Result<ProductDetail, RestError> {
        sqlx::query_as::<_, ProductDetail>(
            "INSERT INTO product_detail (name, description, start_price, sold, active, author) \
             VALUES ($1, $2, $3, FALSE, $4, $5) RETURNING *",
        )
        .bind(&create.name)
        .bind(&create.description)
        .bind(create.start_price)
        .bind(create.active)
        .bind(&create.author)
        .fetch_one(self)
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), "DB: Failed to insert product");
            RestError::TemporarilyUnavailable
        })
    }

    async fn get_product(&self, product_id: ProductId) -> Result<ProductDetail, RestError> {
        sqlx::query_as::<_, ProductDetail>("SELECT * FROM product_detail WHERE id = $1")
            .bind(product_id)
            .fetch_one(self)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RestError::ProductNotFound,
                _ => {
                    tracing::error!(
                        error = e.to_string(),
                        product_id = product_id,
                        "DB: Failed to get product"
                    );
                    RestError::TemporarilyUnavailable
                }
            })
    }

    async fn get_products(&self, include_inactive: bool) -> Result<Vec<ProductDetail>, RestError> {
        let query = if include_inactive {
            "SELECT * FROM product_detail ORDER BY id"
        } else {
            "SELECT * FROM product_detail WHERE active = TRUE ORDER BY id"
        };
        sqlx::query_as::<_, ProductDetail>(query)
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::error!(error = e.to_string(), "DB: Failed to list products");
                RestError::TemporarilyUnavailable
            })
    }

    async fn update_product_status(
        &self,
        product_id: ProductId,
        active: bool,
    ) -> Result<ProductDetail, RestError> {
        sqlx::query_as::<_, ProductDetail>(
            "UPDATE product_detail SET active = $2 WHERE id = $1 RETURNING *",
        )
        .bind(product_id)
        .bind(active)
        .fetch_one(self)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::ProductNotFound,
            _ => {
                tracing::error!(
                    error = e.to_string(),
                    product_id = product_id,
                    "DB: Failed to update product status"
                );
                RestError::TemporarilyUnavailable
            }
        })
    }

    async fn conclude_product(
        &self,
        product_id: ProductId,
        sold_price: Option<f64>,
    ) -> Result<ProductDetail, RestError> {
        sqlx::query_as::<_, ProductDetail>(
            "UPDATE product_detail SET sold = TRUE, active = FALSE, sold_price = $2 \
             WHERE id = $1 RETURNING *",
        )
        .bind(product_id)
        .bind(sold_price)
        .fetch_one(self)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::ProductNotFound,
            _ => {
                tracing::error!(
                    error = e.to_string(),
                    product_id = product_id,
                    "DB: Failed to conclude product"
                );
                RestError::TemporarilyUnavailable
            }
        })
    }
}
