//! Portfolio pass-through routes

use actix_web::{web, HttpResponse};

use r3_core::services::portfolio::PortfolioProvider;
use r3_core::services::verification::EmailService;
use r3_shared::types::ApiResponse;

use crate::dto::portfolio::{AirdropsQuery, DefiDetailsQuery, OverviewQuery};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/portfolio/overview?address=
///
/// Aggregated dashboard view: total balance, tokens, protocols, NFTs and
/// history. Sub-fetch failures are reported in the `errors` field instead
/// of failing the whole response.
pub async fn overview<M, P>(
    state: web::Data<AppState<M, P>>,
    query: web::Query<OverviewQuery>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    match state.portfolio.overview(&query.address).await {
        Ok(overview) => HttpResponse::Ok().json(ApiResponse::success(overview)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/portfolio/airdrops?address=
pub async fn airdrops<M, P>(
    state: web::Data<AppState<M, P>>,
    query: web::Query<AirdropsQuery>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    match state.portfolio.airdrops(&query.address).await {
        Ok(airdrops) => HttpResponse::Ok().json(ApiResponse::success(airdrops)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/portfolio/defi-details?address=&protocol_id=
pub async fn defi_details<M, P>(
    state: web::Data<AppState<M, P>>,
    query: web::Query<DefiDetailsQuery>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    match state
        .portfolio
        .defi_details(&query.address, query.protocol_id.as_deref())
        .await
    {
        Ok(details) => HttpResponse::Ok().json(ApiResponse::success(details)),
        Err(error) => handle_domain_error(error),
    }
}
