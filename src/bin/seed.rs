use std::{env, fs, path::PathBuf};

use adapter::store::model::{BookingRecord, RoomRecord, Snapshot};
use anyhow::Result;
use kernel::model::id::{BookingId, RoomId};

const DEFAULT_SNAPSHOT_PATH: &str = "data/snapshot.json";

/// Writes a sample snapshot so the server starts with a few rooms and
/// bookings to play with.
fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let path = env::var("SNAPSHOT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH));

    let snapshot = sample_snapshot();

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;

    println!("Initial data has been created and saved to {}", path.display());
    Ok(())
}

fn sample_snapshot() -> Snapshot {
    Snapshot {
        rooms: vec![
            RoomRecord {
                id: RoomId::new(1),
                name: "Conference Room A".into(),
                seats_available: 20,
                amenities: "Projector, Whiteboard".into(),
                price_per_hour: 100.0,
                is_booked: false,
            },
            RoomRecord {
                id: RoomId::new(2),
                name: "Meeting Room B".into(),
                seats_available: 10,
                amenities: "Teleconference System".into(),
                price_per_hour: 50.0,
                is_booked: false,
            },
            RoomRecord {
                id: RoomId::new(3),
                name: "Event Hall C".into(),
                seats_available: 100,
                amenities: "Stage, Microphones".into(),
                price_per_hour: 500.0,
                is_booked: false,
            },
        ],
        bookings: vec![
            BookingRecord {
                id: BookingId::new(1),
                customer_name: "Alice Johnson".into(),
                date: "2024-09-10".into(),
                start_time: "09:00".into(),
                end_time: "12:00".into(),
                room_id: RoomId::new(1),
            },
            BookingRecord {
                id: BookingId::new(2),
                customer_name: "Bob Smith".into(),
                date: "2024-09-11".into(),
                start_time: "14:00".into(),
                end_time: "16:00".into(),
                room_id: RoomId::new(2),
            },
            BookingRecord {
                id: BookingId::new(3),
                customer_name: "Carol Brown".into(),
                date: "2024-09-12".into(),
                start_time: "10:00".into(),
                end_time: "13:00".into(),
                room_id: RoomId::new(3),
            },
        ],
    }
}
