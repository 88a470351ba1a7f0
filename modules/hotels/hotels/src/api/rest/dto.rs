//! REST DTOs for the hotels module.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

use hotels_sdk::{Hotel, HotelWithRooms, Room};

/// RFC 3339, UTC, millisecond precision, `Z` suffix.
fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// A hotel as listed by `GET /hotels`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    /// Image URL.
    pub image: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelDto {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

/// A hotel with its rooms, as returned by `GET /hotels/{hotelId}`.
///
/// Hotel fields are inlined at the top level; rooms go under `Rooms`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HotelWithRoomsDto {
    #[serde(flatten)]
    pub hotel: HotelDto,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomDto>,
}

impl From<HotelWithRooms> for HotelWithRoomsDto {
    fn from(value: HotelWithRooms) -> Self {
        Self {
            hotel: value.hotel.into(),
            rooms: value.rooms.into_iter().map(Into::into).collect(),
        }
    }
}
