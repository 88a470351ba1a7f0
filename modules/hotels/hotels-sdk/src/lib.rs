//! Hotels SDK
//!
//! Transport-agnostic models and the public error type of the hotels module.
//! The REST layer and the domain service both speak in these types.

pub mod errors;
pub mod models;

pub use errors::HotelsError;
pub use models::{
    Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketStatus, TicketType,
    TicketWithType, UnknownTicketStatus,
};
