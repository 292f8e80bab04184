//! HTTP API Layer
//!
//! This crate provides the REST API for the claims management system using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Claim submission and review, reports, health probes
//! - **Middleware**: Authentication, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(service, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimService;
use infra_db::DatabasePool;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, reports};
use crate::middleware::{audit_middleware, auth_middleware};

/// Uploads are capped at 5 MiB; leave headroom for the other form fields
const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClaimService>,
    pub config: ApiConfig,
    /// Present when the API fronts a real database; used by readiness
    pub pool: Option<DatabasePool>,
}

impl AppState {
    pub fn new(service: Arc<ClaimService>, config: ApiConfig) -> Self {
        Self {
            service,
            config,
            pool: None,
        }
    }

    pub fn with_pool(mut self, pool: DatabasePool) -> Self {
        self.pool = Some(pool);
        self
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/", get(claims::list_all))
        .route("/pending", get(claims::list_pending))
        .route("/mine", get(claims::list_mine))
        .route("/:id/approve", post(claims::approve_claim))
        .route("/:id/reject", post(claims::reject_claim))
        .route("/:id", delete(claims::delete_claim));

    // Report routes
    let report_routes = Router::new().route("/approved-claims", get(reports::approved_claims));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/reports", report_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
