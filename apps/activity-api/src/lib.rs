pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::activity_service::ActivityService;

#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<ActivityService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/activities",
            get(handlers::activities::get_activities).post(handlers::activities::create_activity),
        )
        .route(
            "/api/activities/{id}",
            put(handlers::activities::update_activity)
                .delete(handlers::activities::delete_activity),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
