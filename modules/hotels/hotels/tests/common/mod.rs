#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Shared setup and factories for hotels integration tests

use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{header::AUTHORIZATION, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use hotels::config::HotelsConfig;
use hotels::infra::storage::entity::{enrollment, hotel, room, session, ticket, ticket_type, user};
use hotels::{HotelsModule, TicketStatus};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};
use tower::ServiceExt as _;

pub const SECRET: &str = "integration-test-secret";

static SEQ: AtomicUsize = AtomicUsize::new(1);

fn next_seq() -> usize {
    SEQ.fetch_add(1, Ordering::SeqCst)
}

/// Fresh in-memory database with the schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    HotelsModule::migrate(&db).await.unwrap();
    db
}

pub fn config() -> HotelsConfig {
    HotelsConfig {
        jwt_secret: SECRET.to_owned(),
        ..HotelsConfig::default()
    }
}

pub fn app(db: &DatabaseConnection) -> Router {
    app_with(db, &config())
}

pub fn app_with(db: &DatabaseConnection, cfg: &HotelsConfig) -> Router {
    HotelsModule::init(db, cfg).unwrap().register_rest(Router::new())
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

pub fn json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

// ---------------------------------------------------------------------------
// Factories
// ---------------------------------------------------------------------------

pub async fn create_user(db: &DatabaseConnection) -> user::Model {
    let now = Utc::now();
    user::ActiveModel {
        email: Set(format!("user{}@example.com", next_seq())),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

/// Signs a token for `user_id` and stores it as a session.
pub async fn create_session(db: &DatabaseConnection, user_id: i32) -> String {
    let token = sign_token(user_id, SECRET, None);
    store_session(db, user_id, &token).await;
    token
}

pub async fn store_session(db: &DatabaseConnection, user_id: i32, token: &str) {
    let now = Utc::now();
    session::ActiveModel {
        user_id: Set(user_id),
        token: Set(token.to_owned()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub fn sign_token(user_id: i32, secret: &str, exp: Option<u64>) -> String {
    let iat = u64::try_from(Utc::now().timestamp()).unwrap();
    let claims = hotels::auth::Claims {
        user_id,
        iat: Some(iat),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// A user with a live session; returns the user and their bearer token.
pub async fn authenticated_user(db: &DatabaseConnection) -> (user::Model, String) {
    let user = create_user(db).await;
    let token = create_session(db, user.id).await;
    (user, token)
}

pub async fn create_enrollment(db: &DatabaseConnection, user_id: i32) -> enrollment::Model {
    let now = Utc::now();
    let seq = next_seq();
    enrollment::ActiveModel {
        name: Set(format!("Attendee {seq}")),
        cpf: Set(format!("{seq:011}")),
        birthday: Set(Utc.with_ymd_and_hms(1990, 5, 17, 0, 0, 0).unwrap()),
        phone: Set("(21) 98999-9999".to_owned()),
        user_id: Set(user_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_ticket_type(
    db: &DatabaseConnection,
    is_remote: bool,
    includes_hotel: bool,
) -> ticket_type::Model {
    let now = Utc::now();
    ticket_type::ActiveModel {
        name: Set(format!("Ticket type {}", next_seq())),
        price: Set(600),
        is_remote: Set(is_remote),
        includes_hotel: Set(includes_hotel),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_ticket(
    db: &DatabaseConnection,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
) -> ticket::Model {
    let now = Utc::now();
    ticket::ActiveModel {
        ticket_type_id: Set(ticket_type_id),
        enrollment_id: Set(enrollment_id),
        status: Set(status.as_str().to_owned()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

/// Enrollment plus a ticket with the given status and flags for `user_id`.
pub async fn create_ticket_for_hotel(
    db: &DatabaseConnection,
    user_id: i32,
    status: TicketStatus,
    is_remote: bool,
    includes_hotel: bool,
) -> ticket::Model {
    let enrollment = create_enrollment(db, user_id).await;
    let ticket_type = create_ticket_type(db, is_remote, includes_hotel).await;
    create_ticket(db, enrollment.id, ticket_type.id, status).await
}

pub async fn create_hotel(db: &DatabaseConnection, name: &str) -> hotel::Model {
    let now = Utc::now();
    hotel::ActiveModel {
        name: Set(name.to_owned()),
        image: Set(format!("https://img.example.com/hotels/{}.jpg", next_seq())),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_room(db: &DatabaseConnection, hotel_id: i32, capacity: i32) -> room::Model {
    let now = Utc::now();
    room::ActiveModel {
        name: Set(format!("Room {}", next_seq())),
        capacity: Set(capacity),
        hotel_id: Set(hotel_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
