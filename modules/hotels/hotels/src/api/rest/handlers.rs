use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::Json;
use tracing::{debug, instrument};

use hotels_sdk::HotelsError;

use crate::auth::Authz;
use crate::domain::service::HotelsService;

use super::dto::{HotelDto, HotelWithRoomsDto};
use super::error::{ApiError, ApiResult};
use super::openapi::HotelsApiDoc;

/// List every hotel.
#[utoipa::path(
    get,
    path = "/hotels",
    tag = "Hotels",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Hotels in storage order", body = [HotelDto]),
        (status = 401, description = "Missing, invalid or expired token, or no session"),
        (status = 402, description = "Ticket is not paid, is remote or does not include hotel", body = String),
        (status = 404, description = "Caller has no enrollment or no ticket", body = String),
        (status = 500, description = "Unexpected failure", body = String),
    )
)]
#[instrument(skip_all, fields(user_id = ctx.user_id()))]
pub async fn list_hotels(
    Authz(ctx): Authz,
    Extension(svc): Extension<Arc<HotelsService>>,
) -> ApiResult<Json<Vec<HotelDto>>> {
    let hotels = svc.list_hotels(&ctx).await?;
    Ok(Json(hotels.into_iter().map(Into::into).collect()))
}

/// Fetch one hotel with its rooms.
#[utoipa::path(
    get,
    path = "/hotels/{hotelId}",
    tag = "Hotels",
    security(("bearerAuth" = [])),
    params(("hotelId" = i32, Path, description = "Hotel identifier, a positive integer")),
    responses(
        (status = 200, description = "Hotel with its rooms", body = HotelWithRoomsDto),
        (status = 401, description = "Missing, invalid or expired token, or no session"),
        (status = 402, description = "Ticket is not paid, is remote or does not include hotel", body = String),
        (status = 404, description = "Malformed id, unknown hotel, or no enrollment or ticket", body = String),
        (status = 500, description = "Unexpected failure", body = String),
    )
)]
#[instrument(skip_all, fields(user_id = ctx.user_id(), hotel_id = %raw_id))]
pub async fn get_hotel_rooms(
    Authz(ctx): Authz,
    Extension(svc): Extension<Arc<HotelsService>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<HotelWithRoomsDto>> {
    let Some(hotel_id) = parse_hotel_id(&raw_id) else {
        debug!("Rejecting malformed hotel id");
        return Err(ApiError(HotelsError::not_found("Hotel")));
    };

    let hotel = svc.get_hotel_with_rooms(&ctx, hotel_id).await?;
    Ok(Json(hotel.into()))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi as _;
    Json(HotelsApiDoc::openapi())
}

/// Accepts only positive base-10 integers that fit in `i32`.
fn parse_hotel_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::repos::{EnrollmentRepository, HotelRepository, TicketRepository};
    use crate::security::SecurityContext;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use chrono::{TimeZone, Utc};
    use hotels_sdk::{
        Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketStatus, TicketType,
        TicketWithType,
    };
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt as _;

    struct MockEnrollments {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl EnrollmentRepository for MockEnrollments {
        async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(Enrollment {
                id: 1,
                user_id,
                name: "Ana".to_owned(),
            }))
        }
    }

    struct MockTickets {
        status: TicketStatus,
    }

    #[async_trait]
    impl TicketRepository for MockTickets {
        async fn find_by_enrollment_id(
            &self,
            enrollment_id: i32,
        ) -> Result<Option<TicketWithType>, DomainError> {
            Ok(Some(TicketWithType {
                ticket: Ticket {
                    id: 1,
                    enrollment_id,
                    ticket_type_id: 1,
                    status: self.status,
                },
                ticket_type: TicketType {
                    id: 1,
                    name: "Presencial com hotel".to_owned(),
                    price: 600,
                    is_remote: false,
                    includes_hotel: true,
                },
            }))
        }
    }

    struct MockHotels;

    fn hotel() -> Hotel {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        Hotel {
            id: 1,
            name: "Hilton Copacabana".to_owned(),
            image: "https://img.example.com/hilton.jpg".to_owned(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[async_trait]
    impl HotelRepository for MockHotels {
        async fn list(&self) -> Result<Vec<Hotel>, DomainError> {
            Ok(vec![hotel()])
        }

        async fn find_with_rooms(
            &self,
            hotel_id: i32,
        ) -> Result<Option<HotelWithRooms>, DomainError> {
            if hotel_id != 1 {
                return Ok(None);
            }
            let hotel = hotel();
            Ok(Some(HotelWithRooms {
                rooms: vec![Room {
                    id: 7,
                    name: "101".to_owned(),
                    capacity: 2,
                    hotel_id: 1,
                    created_at: hotel.created_at,
                    updated_at: hotel.updated_at,
                }],
                hotel,
            }))
        }
    }

    fn create_test_router(status: TicketStatus, enrollment_calls: Arc<AtomicUsize>) -> Router {
        let service = Arc::new(HotelsService::new(
            Arc::new(MockEnrollments {
                calls: enrollment_calls,
            }),
            Arc::new(MockTickets { status }),
            Arc::new(MockHotels),
        ));
        Router::new()
            .route("/hotels", get(list_hotels))
            .route("/hotels/{hotel_id}", get(get_hotel_rooms))
            .layer(Extension(service))
            .layer(Extension(SecurityContext::for_user(1)))
    }

    async fn call(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn list_hotels_returns_json_array() {
        let app = create_test_router(TicketStatus::Paid, Arc::default());

        let (status, body) = call(app, "/hotels").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json[0]["name"], "Hilton Copacabana");
        assert_eq!(json[0]["createdAt"], "2024-03-01T10:00:00.000Z");
    }

    #[tokio::test]
    async fn get_hotel_returns_rooms() {
        let app = create_test_router(TicketStatus::Paid, Arc::default());

        let (status, body) = call(app, "/hotels/1").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["Rooms"][0]["capacity"], 2);
    }

    #[tokio::test]
    async fn unpaid_ticket_is_payment_required() {
        let app = create_test_router(TicketStatus::Reserved, Arc::default());

        let (status, body) = call(app, "/hotels").await;

        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body, b"Payment Required");
    }

    #[tokio::test]
    async fn unknown_hotel_is_not_found() {
        let app = create_test_router(TicketStatus::Paid, Arc::default());

        let (status, body) = call(app, "/hotels/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"Not Found");
    }

    #[tokio::test]
    async fn malformed_ids_short_circuit_before_gate() {
        for uri in ["/hotels/abc", "/hotels/0", "/hotels/-3", "/hotels/1.5"] {
            let calls = Arc::new(AtomicUsize::new(0));
            let app = create_test_router(TicketStatus::Paid, Arc::clone(&calls));

            let (status, _) = call(app, uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(calls.load(Ordering::SeqCst), 0, "{uri}");
        }
    }

    #[test]
    fn parse_hotel_id_accepts_positive_integers_only() {
        assert_eq!(parse_hotel_id("42"), Some(42));
        assert_eq!(parse_hotel_id("0"), None);
        assert_eq!(parse_hotel_id("-3"), None);
        assert_eq!(parse_hotel_id("abc"), None);
        assert_eq!(parse_hotel_id("99999999999"), None);
    }
}
