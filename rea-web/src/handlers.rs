use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::models::{
    BoroughSalesResponse, NeighborhoodsResponse, PermitsResponse, PropertiesResponse,
};
use crate::state::AppState;
use rea_core::domain::{MarketSummaryResult, ZipSummary};

#[derive(Debug, Deserialize)]
pub struct PropertiesQuery {
    #[serde(default = "default_property_limit")]
    pub limit: u32,
    pub zip_code: Option<String>,
    pub min_value: Option<f64>,
}

fn default_property_limit() -> u32 {
    100
}

pub async fn properties(
    State(state): State<AppState>,
    Query(params): Query<PropertiesQuery>,
) -> Json<PropertiesResponse> {
    let properties = state
        .austin
        .properties(params.limit, params.zip_code.as_deref(), params.min_value)
        .await;
    Json(PropertiesResponse {
        total: properties.len(),
        properties,
    })
}

pub async fn market_summary(State(state): State<AppState>) -> Json<MarketSummaryResult> {
    Json(state.austin.market_summary().await)
}

pub async fn zip_analysis(State(state): State<AppState>) -> Json<Vec<ZipSummary>> {
    Json(state.austin.zip_analysis().await)
}

#[derive(Debug, Deserialize)]
pub struct PermitsQuery {
    #[serde(default = "default_permit_limit")]
    pub limit: u32,
}

fn default_permit_limit() -> u32 {
    50
}

pub async fn recent_permits(
    State(state): State<AppState>,
    Query(params): Query<PermitsQuery>,
) -> Json<PermitsResponse> {
    let permits = state.austin.recent_permits(params.limit).await;
    Json(PermitsResponse {
        total: permits.len(),
        permits,
    })
}

#[derive(Debug, Deserialize)]
pub struct RecentSalesQuery {
    #[serde(default = "default_months")]
    pub months: u32,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

fn default_months() -> u32 {
    12
}

fn default_pages() -> u32 {
    5
}

pub async fn nyc_recent_sales(
    State(state): State<AppState>,
    Query(params): Query<RecentSalesQuery>,
) -> Json<BoroughSalesResponse> {
    match state
        .nyc
        .recent_sales_by_borough(params.months, params.pages)
        .await
    {
        Ok(boroughs) => Json(BoroughSalesResponse {
            error: None,
            total: boroughs.len(),
            boroughs,
        }),
        Err(e) => {
            error!(error = %e, "recent sales query failed");
            Json(BoroughSalesResponse {
                error: Some(e.to_string()),
                boroughs: Vec::new(),
                total: 0,
            })
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NeighborhoodsQuery {
    pub borough: String,
    #[serde(default = "default_months")]
    pub months: u32,
}

pub async fn nyc_neighborhoods(
    State(state): State<AppState>,
    Query(params): Query<NeighborhoodsQuery>,
) -> Json<NeighborhoodsResponse> {
    match state
        .nyc
        .neighborhood_breakdown(&params.borough, params.months)
        .await
    {
        Ok(neighborhoods) => Json(NeighborhoodsResponse {
            error: None,
            total: neighborhoods.len(),
            neighborhoods,
        }),
        Err(e) => {
            error!(error = %e, borough = %params.borough, "neighborhood query failed");
            Json(NeighborhoodsResponse {
                error: Some(e.to_string()),
                neighborhoods: Vec::new(),
                total: 0,
            })
        }
    }
}
