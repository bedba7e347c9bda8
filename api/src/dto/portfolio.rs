//! Portfolio DTOs

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewQuery {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirdropsQuery {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefiDetailsQuery {
    pub address: String,
    pub protocol_id: Option<String>,
}
