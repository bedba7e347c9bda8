use actix_web::{web, HttpResponse};
use validator::Validate;

use r3_core::services::portfolio::PortfolioProvider;
use r3_core::services::verification::EmailService;
use r3_shared::types::ApiResponse;

use crate::dto::verification::{ResetChallengeRequest, ResetChallengeResponse};
use crate::handlers::validation_error_response;
use crate::routes::AppState;

/// Handler for POST /api/v1/verification/reset
///
/// Discards the challenge for an address (the hosting modal was
/// dismissed). Always succeeds; resetting a non-existent challenge is a
/// no-op.
pub async fn reset<M, P>(
    state: web::Data<AppState<M, P>>,
    request: web::Json<ResetChallengeRequest>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    state.verification.reset(&request.email);
    HttpResponse::Ok().json(ApiResponse::success(ResetChallengeResponse {
        message: "Verification challenge cleared".to_string(),
    }))
}
