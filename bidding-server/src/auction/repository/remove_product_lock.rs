use {
    super::Repository,
    crate::kernel::entities::ProductId,
    std::sync::Arc,
};

impl Repository {
    pub async fn remove_product_lock(&self, product_id: &ProductId) {
        let mut mutex_guard = self.in_memory_store.product_locks.lock().await;
        let product_lock = mutex_guard.get(product_id);
        if let Some(product_lock) = product_lock {
            // Whenever there is no task borrowing a lock for this product, we can remove it from the locks HashMap.
            if Arc::strong_count(product_lock) == 1 {
                mutex_guard.remove(product_id);
            }
        }
    }
}
