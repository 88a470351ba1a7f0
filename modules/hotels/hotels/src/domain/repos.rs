//! Storage ports used by the domain service.
//!
//! Implementations own their database handle; the service never sees a
//! connection.

use async_trait::async_trait;
use hotels_sdk::{Enrollment, Hotel, HotelWithRooms, TicketWithType};

use crate::domain::error::DomainError;

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find the enrollment owned by `user_id`.
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>, DomainError>;
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Find the first ticket of an enrollment together with its ticket type.
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<TicketWithType>, DomainError>;
}

#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// All hotels, in primary key order.
    async fn list(&self) -> Result<Vec<Hotel>, DomainError>;

    /// One hotel with its rooms nested, rooms in primary key order.
    async fn find_with_rooms(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>, DomainError>;
}
