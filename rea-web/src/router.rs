use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::handlers::{
    market_summary, nyc_neighborhoods, nyc_recent_sales, properties, recent_permits, zip_analysis,
};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/properties", get(properties))
        .route("/api/market-summary", get(market_summary))
        .route("/api/zip-analysis", get(zip_analysis))
        .route("/api/recent-permits", get(recent_permits))
        .route("/api/nyc/recent-sales", get(nyc_recent_sales))
        .route("/api/nyc/neighborhoods", get(nyc_neighborhoods))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
