use std::sync::Arc;

use hotels_sdk::{Hotel, HotelWithRooms};
use tracing::{debug, info, instrument};

use crate::domain::eligibility::check_hotel_access;
use crate::domain::error::DomainError;
use crate::domain::repos::{EnrollmentRepository, HotelRepository, TicketRepository};
use crate::security::SecurityContext;

/// Hotel listing behind the enrollment and ticket gate.
#[derive(Clone)]
pub struct HotelsService {
    enrollments: Arc<dyn EnrollmentRepository>,
    tickets: Arc<dyn TicketRepository>,
    hotels: Arc<dyn HotelRepository>,
}

impl HotelsService {
    #[must_use]
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        tickets: Arc<dyn TicketRepository>,
        hotels: Arc<dyn HotelRepository>,
    ) -> Self {
        Self {
            enrollments,
            tickets,
            hotels,
        }
    }

    /// Enrollment, then ticket, then the access policy.
    ///
    /// # Errors
    /// `NotFound` variants when the enrollment or ticket is missing,
    /// `PaymentRequired` when the ticket does not grant hotel access.
    #[instrument(skip(self, ctx), fields(user_id = ctx.user_id()))]
    pub async fn ensure_hotel_access(&self, ctx: &SecurityContext) -> Result<(), DomainError> {
        let user_id = ctx.user_id();

        let enrollment = self
            .enrollments
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| DomainError::enrollment_not_found(user_id))?;

        let ticket = self
            .tickets
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or_else(|| DomainError::ticket_not_found(enrollment.id))?;

        check_hotel_access(&ticket).map_err(|reason| {
            info!(
                enrollment_id = enrollment.id,
                ticket_id = ticket.ticket.id,
                %reason,
                "Hotel access denied"
            );
            DomainError::payment_required(reason)
        })
    }

    /// # Errors
    /// Gate failures from [`Self::ensure_hotel_access`], or a storage error.
    #[instrument(skip(self, ctx), fields(user_id = ctx.user_id()))]
    pub async fn list_hotels(&self, ctx: &SecurityContext) -> Result<Vec<Hotel>, DomainError> {
        self.ensure_hotel_access(ctx).await?;

        let hotels = self.hotels.list().await?;
        debug!("Listed {} hotels", hotels.len());
        Ok(hotels)
    }

    /// # Errors
    /// Gate failures from [`Self::ensure_hotel_access`], `HotelNotFound`, or a
    /// storage error.
    #[instrument(skip(self, ctx), fields(user_id = ctx.user_id()))]
    pub async fn get_hotel_with_rooms(
        &self,
        ctx: &SecurityContext,
        hotel_id: i32,
    ) -> Result<HotelWithRooms, DomainError> {
        self.ensure_hotel_access(ctx).await?;

        let found = self.hotels.find_with_rooms(hotel_id).await?;
        let hotel = found.ok_or_else(|| DomainError::hotel_not_found(hotel_id))?;

        debug!("Hotel has {} rooms", hotel.rooms.len());
        Ok(hotel)
    }
}
