pub mod model;

use std::{
    path::Path,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use kernel::model::{
    booking::Booking,
    id::{BookingId, RoomId},
    room::Room,
};
use shared::error::{AppError, AppResult};

use self::model::Snapshot;

/// Shared in-memory state behind every repository.
///
/// Mutating operations take the write lock for their whole check-then-act
/// sequence; reads take the read lock and may run concurrently. Guards are
/// never held across an `.await`.
#[derive(Clone)]
pub struct AppStore(Arc<RwLock<StoreState>>);

#[derive(Debug)]
pub struct StoreState {
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    next_room_id: u64,
    next_booking_id: u64,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            rooms: Vec::new(),
            bookings: Vec::new(),
            next_room_id: 1,
            next_booking_id: 1,
        }
    }

    /// Hands out the next room id. The counter only moves forward, so ids
    /// stay unique even if rooms are ever removed.
    pub fn allocate_room_id(&mut self) -> RoomId {
        let id = RoomId::new(self.next_room_id);
        self.next_room_id += 1;
        id
    }

    pub fn allocate_booking_id(&mut self) -> BookingId {
        let id = BookingId::new(self.next_booking_id);
        self.next_booking_id += 1;
        id
    }
}

impl AppStore {
    pub fn empty() -> Self {
        Self(Arc::new(RwLock::new(StoreState::empty())))
    }

    /// Builds a store from a decoded snapshot. Id counters resume past the
    /// highest id present so reloaded data never collides with new entries.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let rooms: Vec<Room> = snapshot.rooms.into_iter().map(Room::from).collect();
        let bookings: Vec<Booking> = snapshot.bookings.into_iter().map(Booking::from).collect();
        let next_room_id = rooms.iter().map(|r| r.id.value()).max().unwrap_or(0) + 1;
        let next_booking_id = bookings.iter().map(|b| b.id.value()).max().unwrap_or(0) + 1;
        Self(Arc::new(RwLock::new(StoreState {
            rooms,
            bookings,
            next_room_id,
            next_booking_id,
        })))
    }

    /// Loads the snapshot at `path`. A missing or broken file degrades to an
    /// empty store with a log line instead of failing startup.
    pub fn load_or_empty(path: &Path) -> Self {
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Snapshot file not found. Using empty initial data."
            );
            return Self::empty();
        }
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Error loading initial data. Using empty initial data."
                );
                Self::empty()
            }
        }
    }

    fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Serializes the current state to `path`, creating parent directories
    /// as needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let snapshot = self.snapshot()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(())
    }

    pub fn snapshot(&self) -> AppResult<Snapshot> {
        let state = self.read()?;
        Ok(Snapshot::from_state(&state))
    }

    pub fn read(&self) -> AppResult<RwLockReadGuard<'_, StoreState>> {
        self.0.read().map_err(|_| AppError::LockPoisonError)
    }

    pub fn write(&self) -> AppResult<RwLockWriteGuard<'_, StoreState>> {
        self.0.write().map_err(|_| AppError::LockPoisonError)
    }

    /// Liveness probe for the health endpoint.
    pub fn is_healthy(&self) -> bool {
        self.read().is_ok()
    }
}
