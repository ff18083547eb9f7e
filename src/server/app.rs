//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::OrganizationDirectory;
use crate::server::routes::{
    health_handler, large_tech_companies_handler, organizations_handler,
    transformed_organizations_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn OrganizationDirectory>,
    pub default_page_size: u32,
}

/// Build the Axum application router
pub fn build_app(directory: Arc<dyn OrganizationDirectory>, default_page_size: u32) -> Router {
    let app_state = AppState {
        directory,
        default_page_size,
    };

    // CORS configuration - read-only API, GET is all there is
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    let api = Router::new()
        .route("/organizations", get(organizations_handler))
        .route(
            "/transformed_organizations",
            get(transformed_organizations_handler),
        )
        .route("/large_tech_companies", get(large_tech_companies_handler));

    Router::new()
        .nest("/api/v1", api)
        // Health check
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
