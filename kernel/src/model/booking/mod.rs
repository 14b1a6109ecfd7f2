pub mod event;

use shared::config::ConflictPolicy;

use crate::model::id::{BookingId, RoomId};

use self::event::CreateBooking;

/// A confirmed booking of one room for a half-open time interval
/// `[start_time, end_time)` on one date.
///
/// Dates and times are opaque strings compared lexically; `YYYY-MM-DD` and
/// `HH:MM` order the same way the values they denote do.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: RoomId,
}

impl Booking {
    /// Whether this booking occupies the room, date and time the candidate
    /// asks for, with the time test selected by `policy`.
    pub fn conflicts_with(&self, candidate: &CreateBooking, policy: ConflictPolicy) -> bool {
        if self.room_id != candidate.room_id || self.date != candidate.date {
            return false;
        }
        match policy {
            ConflictPolicy::Legacy => {
                (candidate.start_time >= self.start_time && candidate.start_time < self.end_time)
                    || (candidate.end_time > self.start_time
                        && candidate.end_time <= self.end_time)
            }
            ConflictPolicy::Canonical => {
                candidate.start_time < self.end_time && self.start_time < candidate.end_time
            }
        }
    }
}

/// A booking joined with its room, as shown on the customer overview.
#[derive(Debug)]
pub struct CustomerBooking {
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// One entry of a single customer's booking history.
#[derive(Debug)]
pub struct CustomerBookingDetail {
    pub booking_id: BookingId,
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Booking {
        Booking {
            id: BookingId::new(1),
            customer_name: "Alice Johnson".into(),
            date: "2024-09-10".into(),
            start_time: "09:00".into(),
            end_time: "12:00".into(),
            room_id: RoomId::new(1),
        }
    }

    fn candidate(start: &str, end: &str) -> CreateBooking {
        CreateBooking {
            customer_name: "Dan".into(),
            date: "2024-09-10".into(),
            start_time: start.into(),
            end_time: end.into(),
            room_id: RoomId::new(1),
        }
    }

    #[test]
    fn legacy_flags_interval_inside_existing() {
        assert!(existing().conflicts_with(&candidate("10:00", "11:00"), ConflictPolicy::Legacy));
    }

    #[test]
    fn legacy_flags_interval_overlapping_the_start() {
        assert!(existing().conflicts_with(&candidate("08:00", "10:00"), ConflictPolicy::Legacy));
    }

    #[test]
    fn legacy_flags_identical_interval() {
        assert!(existing().conflicts_with(&candidate("09:00", "12:00"), ConflictPolicy::Legacy));
    }

    #[test]
    fn legacy_accepts_back_to_back_intervals() {
        assert!(!existing().conflicts_with(&candidate("12:00", "13:00"), ConflictPolicy::Legacy));
        assert!(!existing().conflicts_with(&candidate("08:00", "09:00"), ConflictPolicy::Legacy));
    }

    #[test]
    fn legacy_misses_interval_containing_existing() {
        // Both endpoints of the candidate land outside the existing booking,
        // so the endpoint checks never fire.
        assert!(!existing().conflicts_with(&candidate("08:00", "13:00"), ConflictPolicy::Legacy));
    }

    #[test]
    fn canonical_flags_interval_containing_existing() {
        assert!(
            existing().conflicts_with(&candidate("08:00", "13:00"), ConflictPolicy::Canonical)
        );
    }

    #[test]
    fn canonical_accepts_back_to_back_intervals() {
        assert!(
            !existing().conflicts_with(&candidate("12:00", "13:00"), ConflictPolicy::Canonical)
        );
    }

    #[test]
    fn other_date_never_conflicts() {
        let mut c = candidate("10:00", "11:00");
        c.date = "2024-09-11".into();
        assert!(!existing().conflicts_with(&c, ConflictPolicy::Legacy));
        assert!(!existing().conflicts_with(&c, ConflictPolicy::Canonical));
    }

    #[test]
    fn other_room_never_conflicts() {
        let mut c = candidate("10:00", "11:00");
        c.room_id = RoomId::new(2);
        assert!(!existing().conflicts_with(&c, ConflictPolicy::Legacy));
        assert!(!existing().conflicts_with(&c, ConflictPolicy::Canonical));
    }
}
