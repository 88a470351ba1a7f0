//! `SeaORM` implementations of the storage ports.

use async_trait::async_trait;
use hotels_sdk::{Enrollment, Hotel, HotelWithRooms, TicketWithType};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};

use super::entity::{enrollment, hotel, room, session, ticket, ticket_type};
use super::mapper::{hotel_with_rooms, ticket_with_type};
use crate::auth::SessionStore;
use crate::domain::error::DomainError;
use crate::domain::repos::{EnrollmentRepository, HotelRepository, TicketRepository};

pub struct SeaOrmEnrollmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmEnrollmentRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepository for SeaOrmEnrollmentRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>, DomainError> {
        let found = enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;
        Ok(found.map(Into::into))
    }
}

pub struct SeaOrmTicketRepository {
    db: DatabaseConnection,
}

impl SeaOrmTicketRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketRepository for SeaOrmTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<TicketWithType>, DomainError> {
        let found = ticket::Entity::find()
            .filter(ticket::Column::EnrollmentId.eq(enrollment_id))
            .order_by_asc(ticket::Column::Id)
            .find_also_related(ticket_type::Entity)
            .one(&self.db)
            .await?;

        let Some((ticket, ticket_type)) = found else {
            return Ok(None);
        };
        let ticket_type = ticket_type.ok_or_else(|| {
            DomainError::database(format!(
                "ticket {} references missing ticket type {}",
                ticket.id, ticket.ticket_type_id
            ))
        })?;

        ticket_with_type(ticket, ticket_type).map(Some)
    }
}

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, DomainError> {
        let hotels = hotel::Entity::find()
            .order_by_asc(hotel::Column::Id)
            .all(&self.db)
            .await?;
        Ok(hotels.into_iter().map(Into::into).collect())
    }

    async fn find_with_rooms(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>, DomainError> {
        let Some(model) = hotel::Entity::find_by_id(hotel_id).one(&self.db).await? else {
            return Ok(None);
        };

        let rooms = model
            .find_related(room::Entity)
            .order_by_asc(room::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Some(hotel_with_rooms(model, rooms)))
    }
}

/// Looks sessions up by their exact token.
pub struct SeaOrmSessionStore {
    db: DatabaseConnection,
}

impl SeaOrmSessionStore {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionStore for SeaOrmSessionStore {
    async fn has_session(&self, token: &str) -> anyhow::Result<bool> {
        let found = session::Entity::find()
            .filter(session::Column::Token.eq(token))
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }
}
