//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventbook API",
        version = "0.1.0",
        description = "REST API for listing, creating, and booking events",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/events", api = domain_events::ApiDoc),
        (path = "/api/bookings", api = domain_bookings::ApiDoc)
    ),
    tags(
        (name = "events", description = "Event listing, detail, similar-events, and creation"),
        (name = "bookings", description = "Event bookings with referential checks")
    )
)]
pub struct ApiDoc;
