use async_trait::async_trait;
use derive_new::new;
use kernel::model::booking::{
    event::CreateBooking, Booking, CustomerBooking, CustomerBookingDetail,
};
use kernel::repository::booking::BookingRepository;
use shared::{
    config::ConflictPolicy,
    error::{AppError, AppResult},
};

use crate::store::AppStore;

#[derive(new)]
pub struct BookingRepositoryImpl {
    store: AppStore,
    conflict_policy: ConflictPolicy,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        // Existence check, conflict scan and append happen under one write
        // lock so concurrent requests cannot interleave between them.
        let mut state = self.store.write()?;

        if !state.rooms.iter().any(|r| r.id == event.room_id) {
            return Err(AppError::EntityNotFound("Room not found.".into()));
        }

        if state
            .bookings
            .iter()
            .any(|b| b.conflicts_with(&event, self.conflict_policy))
        {
            return Err(AppError::BookingConflict(
                "Room is already booked for the selected time.".into(),
            ));
        }

        let booking = Booking {
            id: state.allocate_booking_id(),
            customer_name: event.customer_name,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            room_id: event.room_id,
        };
        state.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn find_all(&self) -> AppResult<Vec<CustomerBooking>> {
        let state = self.store.read()?;
        state
            .bookings
            .iter()
            .map(|booking| {
                let room = state
                    .rooms
                    .iter()
                    .find(|r| r.id == booking.room_id)
                    .ok_or_else(|| integrity_error(booking))?;
                Ok(CustomerBooking {
                    customer_name: booking.customer_name.clone(),
                    room_name: room.name.clone(),
                    date: booking.date.clone(),
                    start_time: booking.start_time.clone(),
                    end_time: booking.end_time.clone(),
                })
            })
            .collect()
    }

    async fn find_by_customer(
        &self,
        customer_name: &str,
    ) -> AppResult<Vec<CustomerBookingDetail>> {
        let state = self.store.read()?;
        state
            .bookings
            .iter()
            .filter(|b| b.customer_name == customer_name)
            .map(|booking| {
                let room = state
                    .rooms
                    .iter()
                    .find(|r| r.id == booking.room_id)
                    .ok_or_else(|| integrity_error(booking))?;
                Ok(CustomerBookingDetail {
                    booking_id: booking.id,
                    customer_name: booking.customer_name.clone(),
                    room_name: room.name.clone(),
                    date: booking.date.clone(),
                    start_time: booking.start_time.clone(),
                    end_time: booking.end_time.clone(),
                })
            })
            .collect()
    }
}

/// Bookings never outlive their room in normal operation; hitting this means
/// the snapshot file was edited by hand.
fn integrity_error(booking: &Booking) -> AppError {
    AppError::DataIntegrityError(format!(
        "booking {} references room {}, which does not exist",
        booking.id, booking.room_id
    ))
}

#[cfg(test)]
mod tests {
    use kernel::model::id::{BookingId, RoomId};
    use kernel::model::room::event::CreateRoom;
    use kernel::repository::room::RoomRepository;

    use super::*;
    use crate::repository::room::RoomRepositoryImpl;
    use crate::store::model::Snapshot;

    async fn store_with_rooms(names: &[&str]) -> anyhow::Result<AppStore> {
        let store = AppStore::empty();
        let rooms = RoomRepositoryImpl::new(store.clone());
        for name in names {
            rooms
                .create(CreateRoom {
                    name: (*name).into(),
                    seats_available: 20,
                    amenities: "Projector, Whiteboard".into(),
                    price_per_hour: 100.0,
                })
                .await?;
        }
        Ok(store)
    }

    fn booking_event(customer: &str, date: &str, start: &str, end: &str, room: u64) -> CreateBooking {
        CreateBooking {
            customer_name: customer.into(),
            date: date.into(),
            start_time: start.into(),
            end_time: end.into(),
            room_id: RoomId::new(room),
        }
    }

    #[tokio::test]
    async fn test_book_room() -> anyhow::Result<()> {
        let store = store_with_rooms(&["Conference Room A"]).await?;
        let repo = BookingRepositoryImpl::new(store, ConflictPolicy::Legacy);

        let booking = repo
            .create(booking_event("Alice Johnson", "2024-09-10", "09:00", "12:00", 1))
            .await?;
        assert_eq!(booking.id, BookingId::new(1));
        assert_eq!(booking.customer_name, "Alice Johnson");
        assert_eq!(booking.date, "2024-09-10");
        assert_eq!(booking.start_time, "09:00");
        assert_eq!(booking.end_time, "12:00");
        assert_eq!(booking.room_id, RoomId::new(1));
        Ok(())
    }

    #[tokio::test]
    async fn test_booking_unknown_room_is_rejected() {
        let repo = BookingRepositoryImpl::new(AppStore::empty(), ConflictPolicy::Legacy);

        let err = repo
            .create(booking_event("Dan", "2024-09-20", "10:00", "11:00", 42))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn test_overlapping_booking_is_rejected() -> anyhow::Result<()> {
        let store = store_with_rooms(&["Conference Room A"]).await?;
        let repo = BookingRepositoryImpl::new(store, ConflictPolicy::Legacy);

        repo.create(booking_event("Alice Johnson", "2024-09-10", "09:00", "12:00", 1))
            .await?;
        let err = repo
            .create(booking_event("Dan", "2024-09-10", "10:00", "11:00", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BookingConflict(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_back_to_back_booking_is_accepted() -> anyhow::Result<()> {
        let store = store_with_rooms(&["Conference Room A"]).await?;
        let repo = BookingRepositoryImpl::new(store, ConflictPolicy::Legacy);

        repo.create(booking_event("Alice Johnson", "2024-09-10", "09:00", "12:00", 1))
            .await?;
        let booking = repo
            .create(booking_event("Dan", "2024-09-10", "12:00", "13:00", 1))
            .await?;
        assert_eq!(booking.id, BookingId::new(2));
        Ok(())
    }

    #[tokio::test]
    async fn test_containing_booking_slips_through_legacy_policy() -> anyhow::Result<()> {
        let store = store_with_rooms(&["Conference Room A"]).await?;
        let repo = BookingRepositoryImpl::new(store, ConflictPolicy::Legacy);

        repo.create(booking_event("Alice Johnson", "2024-09-10", "09:00", "12:00", 1))
            .await?;
        // Both endpoints fall outside the existing booking, so the legacy
        // check lets the wrapping interval through.
        let booking = repo
            .create(booking_event("Dan", "2024-09-10", "08:00", "13:00", 1))
            .await?;
        assert_eq!(booking.id, BookingId::new(2));
        Ok(())
    }

    #[tokio::test]
    async fn test_containing_booking_is_rejected_under_canonical_policy() -> anyhow::Result<()> {
        let store = store_with_rooms(&["Conference Room A"]).await?;
        let repo = BookingRepositoryImpl::new(store, ConflictPolicy::Canonical);

        repo.create(booking_event("Alice Johnson", "2024-09-10", "09:00", "12:00", 1))
            .await?;
        let err = repo
            .create(booking_event("Dan", "2024-09-10", "08:00", "13:00", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BookingConflict(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_same_slot_on_other_date_or_room_is_accepted() -> anyhow::Result<()> {
        let store = store_with_rooms(&["Conference Room A", "Meeting Room B"]).await?;
        let repo = BookingRepositoryImpl::new(store, ConflictPolicy::Legacy);

        repo.create(booking_event("Alice Johnson", "2024-09-10", "09:00", "12:00", 1))
            .await?;
        repo.create(booking_event("Dan", "2024-09-11", "09:00", "12:00", 1))
            .await?;
        repo.create(booking_event("Erin", "2024-09-10", "09:00", "12:00", 2))
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_find_all_joins_room_names() -> anyhow::Result<()> {
        let store = store_with_rooms(&["Conference Room A", "Meeting Room B"]).await?;
        let repo = BookingRepositoryImpl::new(store, ConflictPolicy::Legacy);

        repo.create(booking_event("Alice Johnson", "2024-09-10", "09:00", "12:00", 1))
            .await?;
        repo.create(booking_event("Bob Smith", "2024-09-11", "14:00", "16:00", 2))
            .await?;

        let res = repo.find_all().await?;
        assert_eq!(res.len(), 2);

        let CustomerBooking {
            customer_name,
            room_name,
            date,
            start_time,
            end_time,
        } = res.into_iter().next().unwrap();
        assert_eq!(customer_name, "Alice Johnson");
        assert_eq!(room_name, "Conference Room A");
        assert_eq!(date, "2024-09-10");
        assert_eq!(start_time, "09:00");
        assert_eq!(end_time, "12:00");
        Ok(())
    }

    #[tokio::test]
    async fn test_find_all_flags_booking_without_room() -> anyhow::Result<()> {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "rooms": [],
                "bookings": [
                    {
                        "id": 1,
                        "customerName": "Alice Johnson",
                        "date": "2024-09-10",
                        "startTime": "09:00",
                        "endTime": "12:00",
                        "roomId": 7
                    }
                ]
            }"#,
        )?;
        let repo =
            BookingRepositoryImpl::new(AppStore::from_snapshot(snapshot), ConflictPolicy::Legacy);

        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, AppError::DataIntegrityError(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_customer_filters_exactly() -> anyhow::Result<()> {
        let store = store_with_rooms(&["Conference Room A"]).await?;
        let repo = BookingRepositoryImpl::new(store, ConflictPolicy::Legacy);

        repo.create(booking_event("Alice Johnson", "2024-09-10", "09:00", "12:00", 1))
            .await?;
        repo.create(booking_event("Bob Smith", "2024-09-11", "14:00", "16:00", 1))
            .await?;

        let res = repo.find_by_customer("Alice Johnson").await?;
        assert_eq!(res.len(), 1);

        let CustomerBookingDetail {
            booking_id,
            customer_name,
            room_name,
            ..
        } = res.into_iter().next().unwrap();
        assert_eq!(booking_id, BookingId::new(1));
        assert_eq!(customer_name, "Alice Johnson");
        assert_eq!(room_name, "Conference Room A");
        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_unknown_customer_returns_empty() -> anyhow::Result<()> {
        let store = store_with_rooms(&["Conference Room A"]).await?;
        let repo = BookingRepositoryImpl::new(store, ConflictPolicy::Legacy);

        let res = repo.find_by_customer("Nobody").await?;
        assert!(res.is_empty());
        Ok(())
    }
}
