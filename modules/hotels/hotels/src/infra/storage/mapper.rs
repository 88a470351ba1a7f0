//! Entity to domain model mappers.

use hotels_sdk::{
    Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketStatus, TicketType, TicketWithType,
};

use super::entity::{enrollment, hotel, room, ticket, ticket_type};
use crate::domain::error::DomainError;

impl From<enrollment::Model> for Enrollment {
    fn from(model: enrollment::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
        }
    }
}

impl From<ticket_type::Model> for TicketType {
    fn from(model: ticket_type::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            is_remote: model.is_remote,
            includes_hotel: model.includes_hotel,
        }
    }
}

impl TryFrom<ticket::Model> for Ticket {
    type Error = DomainError;

    fn try_from(model: ticket::Model) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<TicketStatus>()
            .map_err(|e| DomainError::database(format!("ticket {}: {e}", model.id)))?;
        Ok(Self {
            id: model.id,
            enrollment_id: model.enrollment_id,
            ticket_type_id: model.ticket_type_id,
            status,
        })
    }
}

/// Join a ticket row with its ticket type row.
pub fn ticket_with_type(
    ticket: ticket::Model,
    ticket_type: ticket_type::Model,
) -> Result<TicketWithType, DomainError> {
    Ok(TicketWithType {
        ticket: ticket.try_into()?,
        ticket_type: ticket_type.into(),
    })
}

impl From<hotel::Model> for Hotel {
    fn from(model: hotel::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<room::Model> for Room {
    fn from(model: room::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            capacity: model.capacity,
            hotel_id: model.hotel_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub fn hotel_with_rooms(model: hotel::Model, rooms: Vec<room::Model>) -> HotelWithRooms {
    HotelWithRooms {
        hotel: model.into(),
        rooms: rooms.into_iter().map(Into::into).collect(),
    }
}
