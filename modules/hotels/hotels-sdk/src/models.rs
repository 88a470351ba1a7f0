//! Public models for the hotels module.
//!
//! Records here are read-only from this module's point of view: enrollments,
//! tickets and hotels are created elsewhere.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// A user's registration for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
}

/// Payment state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl TicketStatus {
    /// Stored representation of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored status string is neither `RESERVED` nor `PAID`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket status '{0}'")]
pub struct UnknownTicketStatus(pub String);

impl FromStr for TicketStatus {
    type Err = UnknownTicketStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Err(UnknownTicketStatus(other.to_owned())),
        }
    }
}

/// Category of ticket: price and feature flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// Purchase record tied to an enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: i32,
    pub enrollment_id: i32,
    pub ticket_type_id: i32,
    pub status: TicketStatus,
}

/// A ticket together with the type it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketWithType {
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hotel with its rooms nested; `rooms` is empty when the hotel has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
