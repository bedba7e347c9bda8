use actix_web::{web, HttpResponse};

use r3_core::services::portfolio::PortfolioProvider;
use r3_core::services::verification::{format_time, EmailService};
use r3_shared::types::ApiResponse;

use crate::dto::verification::{StatusQuery, StatusResponse};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/verification/status?email=
///
/// Read-only snapshot of the challenge: countdown, expiry and resend
/// flags, attempt counters, state.
pub async fn status<M, P>(
    state: web::Data<AppState<M, P>>,
    query: web::Query<StatusQuery>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    match state.verification.status(&query.email) {
        Ok(status) => {
            let time_left_display = format_time(status.time_left);
            HttpResponse::Ok().json(ApiResponse::success(StatusResponse {
                status,
                time_left_display,
            }))
        }
        Err(error) => handle_domain_error(error),
    }
}
