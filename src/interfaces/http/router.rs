//! API Router with Swagger UI

use axum::http::HeaderValue;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{
    admins, calendar, checkinout, cleaning, customers, health, platforms, reservations,
    room_notes, rooms,
};
use crate::interfaces::http::ApiState;

use crate::interfaces::http::modules::admins::dto::{AdminDto, CreateAdminRequest};
use crate::interfaces::http::modules::checkinout::dto::UpcomingResponse;
use crate::interfaces::http::modules::customers::dto::{
    CreateCustomerRequest, CustomerDto, CustomerReservationsResponse,
};
use crate::interfaces::http::modules::platforms::dto::{CreatePlatformRequest, PlatformDto};
use crate::interfaces::http::modules::reservations::dto::{
    AvailabilityResponse, CreateReservationRequest, ReservationDto,
};
use crate::interfaces::http::modules::room_notes::dto::{CreateRoomNoteRequest, RoomNoteDto};
use crate::interfaces::http::modules::rooms::dto::{CreateRoomRequest, RoomDto};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::root,
        health::handlers::health_check,
        // Reservations
        reservations::handlers::list_reservations,
        reservations::handlers::get_reservation,
        reservations::handlers::create_reservation,
        reservations::handlers::update_reservation_status,
        reservations::handlers::check_room_availability,
        // Check-in / check-out
        checkinout::handlers::check_in,
        checkinout::handlers::check_out,
        checkinout::handlers::upcoming,
        // Rooms
        rooms::handlers::list_rooms,
        rooms::handlers::get_room,
        rooms::handlers::create_room,
        // Cleaning
        cleaning::handlers::list_cleaning_rooms,
        cleaning::handlers::complete_cleaning,
        // Customers
        customers::handlers::list_customers,
        customers::handlers::get_customer,
        customers::handlers::get_customer_reservations,
        customers::handlers::create_customer,
        // Platforms
        platforms::handlers::list_platforms,
        platforms::handlers::create_platform,
        // Admins
        admins::handlers::list_admins,
        admins::handlers::get_admin,
        admins::handlers::create_admin,
        admins::handlers::delete_admin,
        // Room notes
        room_notes::handlers::list_room_notes,
        room_notes::handlers::list_urgent_notes,
        room_notes::handlers::get_room_note,
        room_notes::handlers::create_room_note,
        room_notes::handlers::update_note_progress,
        // Calendar
        calendar::handlers::month_reservations,
        calendar::handlers::week_reservations,
    ),
    components(
        schemas(
            ApiResponse<String>,
            // Reservations
            ReservationDto,
            CreateReservationRequest,
            AvailabilityResponse,
            UpcomingResponse,
            // Rooms
            RoomDto,
            CreateRoomRequest,
            cleaning::handlers::CleaningRoomsResponse,
            // Customers
            CustomerDto,
            CreateCustomerRequest,
            CustomerReservationsResponse,
            // Platforms
            PlatformDto,
            CreatePlatformRequest,
            // Admins
            AdminDto,
            CreateAdminRequest,
            // Room notes
            RoomNoteDto,
            CreateRoomNoteRequest,
            // Calendar
            calendar::handlers::MonthReservationsResponse,
            calendar::handlers::WeekReservationsResponse,
        )
    ),
    tags(
        (name = "Reservations", description = "Reservation lifecycle and availability"),
        (name = "CheckInOut", description = "Check-in / check-out operations"),
        (name = "Rooms", description = "Room inventory"),
        (name = "Cleaning", description = "Housekeeping queue"),
        (name = "Customers", description = "Guest records"),
        (name = "Platforms", description = "Booking platform metadata"),
        (name = "Admins", description = "Back-office staff"),
        (name = "RoomNotes", description = "Staff notes on rooms"),
        (name = "Calendar", description = "Month and week reservation views"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Hotel Management API",
        description = "Back-office API consolidating reservations from multiple booking platforms"
    )
)]
pub struct ApiDoc;

/// Build the CORS layer from configured origins. `*` (or no origins)
/// allows any origin, which is what the dev front end needs.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Create the REST API router.
pub fn create_api_router(state: ApiState, cors_origins: &[String]) -> Router {
    let api = Router::new()
        // Reservations
        .route(
            "/api/reservations",
            get(reservations::handlers::list_reservations)
                .post(reservations::handlers::create_reservation),
        )
        .route(
            "/api/reservations/room/{room_id}/availability",
            get(reservations::handlers::check_room_availability),
        )
        .route(
            "/api/reservations/{id}",
            get(reservations::handlers::get_reservation),
        )
        .route(
            "/api/reservations/{id}/status",
            put(reservations::handlers::update_reservation_status),
        )
        // Check-in / check-out
        .route(
            "/api/checkinout/checkin/{id}",
            post(checkinout::handlers::check_in),
        )
        .route(
            "/api/checkinout/checkout/{id}",
            post(checkinout::handlers::check_out),
        )
        .route(
            "/api/checkinout/upcoming",
            get(checkinout::handlers::upcoming),
        )
        // Rooms
        .route(
            "/api/rooms",
            get(rooms::handlers::list_rooms).post(rooms::handlers::create_room),
        )
        .route("/api/rooms/{room}", get(rooms::handlers::get_room))
        // Cleaning
        .route(
            "/api/cleaning/rooms",
            get(cleaning::handlers::list_cleaning_rooms),
        )
        .route(
            "/api/cleaning/complete/{room}",
            post(cleaning::handlers::complete_cleaning),
        )
        // Customers
        .route(
            "/api/customers",
            get(customers::handlers::list_customers).post(customers::handlers::create_customer),
        )
        .route(
            "/api/customers/{id}",
            get(customers::handlers::get_customer),
        )
        .route(
            "/api/customers/{id}/reservations",
            get(customers::handlers::get_customer_reservations),
        )
        // Platforms
        .route(
            "/api/platforms",
            get(platforms::handlers::list_platforms).post(platforms::handlers::create_platform),
        )
        // Admins
        .route(
            "/api/admins",
            get(admins::handlers::list_admins).post(admins::handlers::create_admin),
        )
        .route(
            "/api/admins/{id}",
            get(admins::handlers::get_admin).delete(admins::handlers::delete_admin),
        )
        // Room notes
        .route(
            "/api/room-notes",
            get(room_notes::handlers::list_room_notes)
                .post(room_notes::handlers::create_room_note),
        )
        .route(
            "/api/room-notes/urgent",
            get(room_notes::handlers::list_urgent_notes),
        )
        .route(
            "/api/room-notes/{id}",
            get(room_notes::handlers::get_room_note),
        )
        .route(
            "/api/room-notes/{id}/progress",
            put(room_notes::handlers::update_note_progress),
        )
        // Calendar
        .route(
            "/api/calendar/month/{year}/{month}",
            get(calendar::handlers::month_reservations),
        )
        .route(
            "/api/calendar/week/{year}/{week}",
            get(calendar::handlers::week_reservations),
        )
        // Health
        .route("/", get(health::handlers::root))
        .route("/health", get(health::handlers::health_check))
        .with_state(state);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::memory::InMemoryRepositoryProvider;
    use crate::interfaces::http::ApiState;

    use super::create_api_router;

    fn app() -> axum::Router {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let state = ApiState::new(repos);
        create_api_router(state, &["*".to_string()])
    }

    async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn put_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn seed_room(app: &axum::Router) -> i32 {
        let (status, body) = send(
            app,
            post_json(
                "/api/rooms",
                json!({
                    "room_number": "101",
                    "room_type": "Standard",
                    "max_guests": 2,
                    "price_per_night": 90.0
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_i64().unwrap() as i32
    }

    fn reservation_body(room_id: i32, check_in: &str, check_out: &str) -> Value {
        json!({
            "customer_id": 1,
            "room_id": room_id,
            "platform_id": 1,
            "check_in": check_in,
            "check_out": check_out,
            "guests": 2,
            "total_price": 450.0,
            "booking_reference": "BK-1001"
        })
    }

    #[tokio::test]
    async fn health_endpoints_respond() {
        let app = app();
        let (status, body) = send(&app, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(&app, get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hotel Management API");
    }

    #[tokio::test]
    async fn booking_flow_end_to_end() {
        let app = app();
        let room_id = seed_room(&app).await;

        // Create
        let (status, body) = send(
            &app,
            post_json(
                "/api/reservations",
                reservation_body(room_id, "2026-01-10", "2026-01-15"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "Reserved");
        let id = body["data"]["id"].as_i64().unwrap();

        // Room is now occupied
        let (_, body) = send(&app, get_req("/api/rooms/101")).await;
        assert_eq!(body["data"]["status"], "occupied");

        // Overlapping booking is rejected
        let (status, body) = send(
            &app,
            post_json(
                "/api/reservations",
                reservation_body(room_id, "2026-01-12", "2026-01-20"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Room is already booked for the selected dates"
        );

        // Adjacent booking succeeds
        let (status, _) = send(
            &app,
            post_json(
                "/api/reservations",
                reservation_body(room_id, "2026-01-16", "2026-01-18"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        // Check in, then the room still reads occupied
        let (status, body) =
            send(&app, post_json(&format!("/api/checkinout/checkin/{id}"), json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "Checked in");

        // Second check-in is guarded
        let (status, body) =
            send(&app, post_json(&format!("/api/checkinout/checkin/{id}"), json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Already checked in");

        // Check out sends the room to cleaning
        let (status, _) =
            send(&app, post_json(&format!("/api/checkinout/checkout/{id}"), json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, get_req("/api/rooms/101")).await;
        assert_eq!(body["data"]["status"], "cleaning");

        // Cleaning completion returns it to available
        let (status, body) =
            send(&app, post_json("/api/cleaning/complete/101", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "available");
    }

    #[tokio::test]
    async fn availability_inverts_overlap() {
        let app = app();
        let room_id = seed_room(&app).await;

        send(
            &app,
            post_json(
                "/api/reservations",
                reservation_body(room_id, "2026-01-10", "2026-01-15"),
            ),
        )
        .await;

        let (status, body) = send(
            &app,
            get_req(&format!(
                "/api/reservations/room/{room_id}/availability?check_in=2026-01-12&check_out=2026-01-20"
            )),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["available"], false);

        let (_, body) = send(
            &app,
            get_req(&format!(
                "/api/reservations/room/{room_id}/availability?check_in=2026-01-16&check_out=2026-01-18"
            )),
        )
        .await;
        assert_eq!(body["data"]["available"], true);
    }

    #[tokio::test]
    async fn status_transition_validates_value() {
        let app = app();
        let room_id = seed_room(&app).await;
        let (_, body) = send(
            &app,
            post_json(
                "/api/reservations",
                reservation_body(room_id, "2026-01-10", "2026-01-15"),
            ),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            put_req(&format!(
                "/api/reservations/{id}/status?status=Checked%20in"
            )),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            put_req(&format!("/api/reservations/{id}/status?status=bogus")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Invalid status"));

        // Prior status survived the rejected write
        let (_, body) = send(&app, get_req(&format!("/api/reservations/{id}"))).await;
        assert_eq!(body["data"]["status"], "Checked in");
    }

    #[tokio::test]
    async fn flexible_date_formats_accepted_on_create() {
        let app = app();
        let room_id = seed_room(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                "/api/reservations",
                reservation_body(room_id, "20260110", "15/01/2026"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["check_in"], "2026-01-10");
        assert_eq!(body["data"]["check_out"], "2026-01-15");
    }

    #[tokio::test]
    async fn unknown_reservation_is_404() {
        let app = app();
        let (status, _) = send(&app, get_req("/api/reservations/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            send(&app, post_json("/api/checkinout/checkin/999", json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_booking_reference_fails_validation() {
        let app = app();
        let room_id = seed_room(&app).await;

        let mut body = reservation_body(room_id, "2026-01-10", "2026-01-15");
        body["booking_reference"] = json!("");
        let (status, _) = send(&app, post_json("/api/reservations", body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn admin_crud_and_note_flow() {
        let app = app();
        seed_room(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                "/api/admins",
                json!({"name": "Mina", "role": "manager"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let admin_id = body["data"]["id"].as_i64().unwrap();

        // Note created with the admin's name instead of the id
        let (status, body) = send(
            &app,
            post_json(
                "/api/room-notes",
                json!({
                    "room_id": "101",
                    "admin_id": "Mina",
                    "note_type": "urgent",
                    "title": "Leaking tap",
                    "description": "Bathroom sink"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["admin_id"].as_i64().unwrap(), admin_id);
        let note_id = body["data"]["id"].as_i64().unwrap();

        let (_, body) = send(&app, get_req("/api/room-notes/urgent")).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (status, body) = send(
            &app,
            put_req(&format!("/api/room-notes/{note_id}/progress?progress=finished")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "completed");

        // Finished notes drop off the urgent queue
        let (_, body) = send(&app, get_req("/api/room-notes/urgent")).await;
        assert!(body["data"].as_array().unwrap().is_empty());

        let (status, _) = send(
            &app,
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admins/{admin_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn calendar_month_window() {
        let app = app();
        let room_id = seed_room(&app).await;
        send(
            &app,
            post_json(
                "/api/reservations",
                reservation_body(room_id, "2026-01-28", "2026-02-02"),
            ),
        )
        .await;

        // Straddles the month boundary, so it shows in both windows
        let (_, body) = send(&app, get_req("/api/calendar/month/2026/1")).await;
        assert_eq!(body["data"]["reservations"].as_array().unwrap().len(), 1);
        let (_, body) = send(&app, get_req("/api/calendar/month/2026/2")).await;
        assert_eq!(body["data"]["reservations"].as_array().unwrap().len(), 1);
        let (_, body) = send(&app, get_req("/api/calendar/month/2026/3")).await;
        assert!(body["data"]["reservations"].as_array().unwrap().is_empty());

        let (status, _) = send(&app, get_req("/api/calendar/month/2026/13")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
