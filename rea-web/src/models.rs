use rea_core::domain::{BoroughSummary, NeighborhoodSummary, PermitRecord, PropertyRecord};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PropertiesResponse {
    pub properties: Vec<PropertyRecord>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct PermitsResponse {
    pub permits: Vec<PermitRecord>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct BoroughSalesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub boroughs: Vec<BoroughSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct NeighborhoodsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub neighborhoods: Vec<NeighborhoodSummary>,
    pub total: usize,
}
