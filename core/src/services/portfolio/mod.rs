//! Portfolio module: read-only aggregation over the third-party
//! blockchain-data provider

mod service;
mod traits;

pub use service::PortfolioService;
pub use traits::PortfolioProvider;
