//! Room domain entity

/// Room status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    /// Ready to be booked
    Available,
    /// A guest is booked in or staying
    Occupied,
    /// Needs servicing before the next guest
    Cleaning,
    /// Out of service
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Cleaning => "cleaning",
            Self::Maintenance => "maintenance",
        }
    }

    /// Map a raw stored value onto a status. Unknown values fall back to
    /// `available`, matching how historical rows behaved.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim() {
            "occupied" => Self::Occupied,
            "cleaning" => Self::Cleaning,
            "maintenance" => Self::Maintenance,
            _ => Self::Available,
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hotel room
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique room ID
    pub id: i32,
    /// Human-facing room number, unique across the hotel
    pub room_number: String,
    /// Room type (Standard, Deluxe, Suite, ...)
    pub room_type: String,
    /// Maximum guest count
    pub max_guests: i32,
    /// Nightly price
    pub price_per_night: f64,
    /// Current status, written by reservation transitions and cleaning
    pub status: RoomStatus,
}

/// Fields for creating a room; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: String,
    pub max_guests: i32,
    pub price_per_night: f64,
    pub status: RoomStatus,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip() {
        for status in &[
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Cleaning,
            RoomStatus::Maintenance,
        ] {
            assert_eq!(&RoomStatus::normalize(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_available() {
        assert_eq!(RoomStatus::normalize("???"), RoomStatus::Available);
        assert_eq!(RoomStatus::normalize(""), RoomStatus::Available);
    }
}
