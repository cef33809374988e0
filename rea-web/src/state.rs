use rea_ingest::sources::austin::AustinApi;
use rea_ingest::sources::nyc::NycSalesApi;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub austin: Arc<AustinApi>,
    pub nyc: Arc<NycSalesApi>,
}
