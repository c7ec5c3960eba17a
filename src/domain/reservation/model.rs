//! Reservation domain entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::room::RoomStatus;

/// Raw status marker for cancelled rows in historical data.
///
/// No API path produces this value; store queries filter it so legacy
/// cancelled rows never block new bookings.
pub const CANCELLED_MARKER: &str = "cancelled";

/// Reservation status
///
/// The three canonical lifecycle states. Legacy raw values are mapped
/// onto these by [`ReservationStatus::normalize`] when a record is
/// materialized from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Booked, guest not yet arrived
    Reserved,
    /// Guest is staying
    CheckedIn,
    /// Guest has left
    CheckedOut,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reserved => "Reserved",
            Self::CheckedIn => "Checked in",
            Self::CheckedOut => "Checked out",
        }
    }

    /// Parse a canonical status value. Anything else is rejected; this is
    /// the strict form used by the transition API.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Reserved" => Some(Self::Reserved),
            "Checked in" => Some(Self::CheckedIn),
            "Checked out" => Some(Self::CheckedOut),
            _ => None,
        }
    }

    /// Map a raw stored value onto a canonical status.
    ///
    /// Applied on every read path, never on write. Tolerates the status
    /// vocabulary of older data: `confirmed`, `Not Checked`, `cancelled`
    /// and empty cells all read as `Reserved`; unrecognized values fall
    /// back to `Reserved` as well.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim() {
            "Checked in" | "checked_in" => Self::CheckedIn,
            "Checked out" | "checked_out" => Self::CheckedOut,
            _ => Self::Reserved,
        }
    }

    /// The room status a reservation in this state projects onto its room.
    ///
    /// `Checked out` maps to `cleaning`: the room needs servicing before
    /// it can be rebooked. Cleaning completion resets it to `available`.
    pub fn room_status(&self) -> RoomStatus {
        match self {
            Self::Reserved | Self::CheckedIn => RoomStatus::Occupied,
            Self::CheckedOut => RoomStatus::Cleaning,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room reservation
#[derive(Debug, Clone)]
pub struct Reservation {
    /// Unique reservation ID
    pub id: i32,
    /// Customer reference
    pub customer_id: i32,
    /// Room reference
    pub room_id: i32,
    /// Booking platform reference
    pub platform_id: i32,
    /// Arrival date
    pub check_in: NaiveDate,
    /// Departure date
    pub check_out: NaiveDate,
    /// Guest count
    pub guests: i32,
    /// Total price for the stay
    pub total_price: f64,
    /// Current lifecycle status
    pub status: ReservationStatus,
    /// The external platform's confirmation code
    pub booking_reference: String,
    /// Free-text staff notes
    pub notes: Option<String>,
    /// When the reservation was created
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Whether this reservation's dates intersect the given range.
    ///
    /// Ranges touching at a single boundary day count as overlapping: a
    /// checkout day equal to another booking's check-in day is a conflict.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.check_in <= check_out && self.check_out >= check_in
    }
}

/// Fields for creating a reservation; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub customer_id: i32,
    pub room_id: i32,
    pub platform_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub total_price: f64,
    pub status: ReservationStatus,
    pub booking_reference: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_reservation(check_in: NaiveDate, check_out: NaiveDate) -> Reservation {
        Reservation {
            id: 1,
            customer_id: 1,
            room_id: 1,
            platform_id: 1,
            check_in,
            check_out,
            guests: 2,
            total_price: 300.0,
            status: ReservationStatus::Reserved,
            booking_reference: "BK-1001".to_string(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = sample_reservation(date(2026, 1, 10), date(2026, 1, 15));
        let b = sample_reservation(date(2026, 1, 12), date(2026, 1, 20));
        assert!(a.overlaps(b.check_in, b.check_out));
        assert!(b.overlaps(a.check_in, a.check_out));
    }

    #[test]
    fn touching_boundary_day_conflicts() {
        // checkout day == another booking's check-in day
        let a = sample_reservation(date(2026, 1, 10), date(2026, 1, 15));
        assert!(a.overlaps(date(2026, 1, 15), date(2026, 1, 18)));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let a = sample_reservation(date(2026, 1, 10), date(2026, 1, 15));
        assert!(!a.overlaps(date(2026, 1, 16), date(2026, 1, 18)));
        assert!(!a.overlaps(date(2026, 1, 1), date(2026, 1, 9)));
    }

    #[test]
    fn canonical_status_roundtrip() {
        for status in &[
            ReservationStatus::Reserved,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
        ] {
            assert_eq!(ReservationStatus::parse(status.as_str()), Some(*status));
            assert_eq!(&ReservationStatus::normalize(status.as_str()), status);
        }
    }

    #[test]
    fn parse_rejects_legacy_and_bogus_values() {
        assert_eq!(ReservationStatus::parse("confirmed"), None);
        assert_eq!(ReservationStatus::parse("checked_in"), None);
        assert_eq!(ReservationStatus::parse("bogus"), None);
        assert_eq!(ReservationStatus::parse(""), None);
    }

    #[test]
    fn normalize_maps_legacy_values() {
        assert_eq!(
            ReservationStatus::normalize("confirmed"),
            ReservationStatus::Reserved
        );
        assert_eq!(
            ReservationStatus::normalize("checked_in"),
            ReservationStatus::CheckedIn
        );
        assert_eq!(
            ReservationStatus::normalize("checked_out"),
            ReservationStatus::CheckedOut
        );
        assert_eq!(
            ReservationStatus::normalize("cancelled"),
            ReservationStatus::Reserved
        );
        assert_eq!(
            ReservationStatus::normalize("Not Checked"),
            ReservationStatus::Reserved
        );
        assert_eq!(
            ReservationStatus::normalize(""),
            ReservationStatus::Reserved
        );
    }

    #[test]
    fn room_status_projection() {
        use crate::domain::room::RoomStatus;
        assert_eq!(
            ReservationStatus::Reserved.room_status(),
            RoomStatus::Occupied
        );
        assert_eq!(
            ReservationStatus::CheckedIn.room_status(),
            RoomStatus::Occupied
        );
        assert_eq!(
            ReservationStatus::CheckedOut.room_status(),
            RoomStatus::Cleaning
        );
    }
}
