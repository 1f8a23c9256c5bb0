use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

/// CORS policy for the browser frontend: one origin, credentials allowed.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([HeaderName::from_static("x-requested-with"), header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Build the router over an already opened pool.
pub fn create_router(pool: SqlitePool, cors_origin: HeaderValue) -> Router {
    Router::new()
        // Liveness
        .route("/hello", get(routes::health::hello))

        // Ticket endpoints
        .route(
            "/tickets",
            get(routes::tickets::get_tickets).post(routes::tickets::create_ticket),
        )
        .route(
            "/tickets/{id}",
            get(routes::tickets::get_ticket_by_id)
                .put(routes::tickets::update_ticket)
                .delete(routes::tickets::delete_ticket),
        )

        // User endpoints
        .route(
            "/users",
            get(routes::users::get_users).post(routes::users::create_user),
        )
        .route(
            "/users/{id}",
            get(routes::users::get_user_by_id)
                .put(routes::users::update_user)
                .delete(routes::users::delete_user),
        )

        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
