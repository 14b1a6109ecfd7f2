use std::sync::Arc;

use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::room::RoomRepositoryImpl;
use adapter::store::AppStore;
use kernel::repository::booking::BookingRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::room::RoomRepository;
use shared::config::AppConfig;

/// Wires concrete repository implementations to the traits the handlers
/// depend on.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    room_repository: Arc<dyn RoomRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl AppRegistry {
    pub fn new(store: AppStore, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(store.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(store.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(
            store.clone(),
            app_config.booking.conflict_policy,
        ));
        Self {
            health_check_repository,
            room_repository,
            booking_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }
}
