use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::dto::{HotelDto, HotelWithRoomsDto, RoomDto};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotels API", description = "Hotels and rooms for eligible attendees"),
    paths(handlers::list_hotels, handlers::get_hotel_rooms),
    components(schemas(HotelDto, RoomDto, HotelWithRoomsDto)),
    modifiers(&BearerAuth),
    tags((name = "Hotels", description = "Hotel listing"))
)]
pub struct HotelsApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
