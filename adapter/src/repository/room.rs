use async_trait::async_trait;
use derive_new::new;
use kernel::model::room::{event::CreateRoom, Room, RoomBooking, RoomListing};
use kernel::repository::room::RoomRepository;
use shared::error::AppResult;

use crate::store::AppStore;

#[derive(new)]
pub struct RoomRepositoryImpl {
    store: AppStore,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let mut state = self.store.write()?;
        let room = Room {
            id: state.allocate_room_id(),
            name: event.name,
            seats_available: event.seats_available,
            amenities: event.amenities,
            price_per_hour: event.price_per_hour,
        };
        state.rooms.push(room.clone());
        Ok(room)
    }

    async fn find_all(&self) -> AppResult<Vec<RoomListing>> {
        let state = self.store.read()?;
        let listings = state
            .rooms
            .iter()
            .map(|room| {
                // First booking in insertion order; further bookings of the
                // same room are not surfaced here.
                let booking = state
                    .bookings
                    .iter()
                    .find(|b| b.room_id == room.id)
                    .map(|b| RoomBooking {
                        customer_name: b.customer_name.clone(),
                        date: b.date.clone(),
                        start_time: b.start_time.clone(),
                        end_time: b.end_time.clone(),
                    });
                RoomListing {
                    room: room.clone(),
                    booking,
                }
            })
            .collect();
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::booking::event::CreateBooking;
    use kernel::model::id::RoomId;
    use kernel::repository::booking::BookingRepository;
    use shared::config::ConflictPolicy;

    use super::*;
    use crate::repository::booking::BookingRepositoryImpl;

    fn room_event(name: &str) -> CreateRoom {
        CreateRoom {
            name: name.into(),
            seats_available: 20,
            amenities: "Projector, Whiteboard".into(),
            price_per_hour: 100.0,
        }
    }

    #[tokio::test]
    async fn test_register_room() -> anyhow::Result<()> {
        let repo = RoomRepositoryImpl::new(AppStore::empty());

        let room = repo.create(room_event("Conference Room A")).await?;
        assert_eq!(room.id, RoomId::new(1));

        let res = repo.find_all().await?;
        assert_eq!(res.len(), 1);

        let RoomListing { room, booking } = res.into_iter().next().unwrap();
        assert_eq!(room.id, RoomId::new(1));
        assert_eq!(room.name, "Conference Room A");
        assert_eq!(room.seats_available, 20);
        assert_eq!(room.amenities, "Projector, Whiteboard");
        assert_eq!(room.price_per_hour, 100.0);
        assert!(booking.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_room_ids_strictly_increase() -> anyhow::Result<()> {
        let repo = RoomRepositoryImpl::new(AppStore::empty());

        let mut last = 0;
        for name in ["Conference Room A", "Meeting Room B", "Event Hall C"] {
            let room = repo.create(room_event(name)).await?;
            assert!(room.id.value() > last);
            last = room.id.value();
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_find_all_surfaces_first_booking_only() -> anyhow::Result<()> {
        let store = AppStore::empty();
        let rooms = RoomRepositoryImpl::new(store.clone());
        let bookings = BookingRepositoryImpl::new(store, ConflictPolicy::Legacy);

        rooms.create(room_event("Conference Room A")).await?;
        for (customer, date) in [("Alice Johnson", "2024-09-10"), ("Bob Smith", "2024-09-11")] {
            bookings
                .create(CreateBooking {
                    customer_name: customer.into(),
                    date: date.into(),
                    start_time: "09:00".into(),
                    end_time: "12:00".into(),
                    room_id: RoomId::new(1),
                })
                .await?;
        }

        let res = rooms.find_all().await?;
        let RoomListing { booking, .. } = res.into_iter().next().unwrap();
        let booking = booking.unwrap();
        assert_eq!(booking.customer_name, "Alice Johnson");
        assert_eq!(booking.date, "2024-09-10");
        Ok(())
    }
}
