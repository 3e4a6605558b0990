use {
    super::Repository,
    crate::{
        auction::entities,
        kernel::entities::ProductId,
    },
};

impl Repository {
    pub async fn get_or_create_product_lock(
        &self,
        product_id: ProductId,
    ) -> entities::ProductLock {
        self.in_memory_store
            .product_locks
            .lock()
            .await
            .entry(product_id)
            .or_default()
            .clone()
    }
}
