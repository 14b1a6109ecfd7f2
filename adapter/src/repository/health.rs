use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use crate::store::AppStore;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    store: AppStore,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    async fn check_store(&self) -> bool {
        self.store.is_healthy()
    }
}
