use actix_web::{web, HttpResponse};
use validator::Validate;

use r3_core::services::portfolio::PortfolioProvider;
use r3_core::services::verification::EmailService;
use r3_shared::types::ApiResponse;

use crate::dto::verification::{ResendCodeRequest, SendCodeResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/verification/resend
///
/// Regenerates and redispatches the code for an address. Only permitted
/// once the previous code's window has elapsed; until then responds 429
/// without sending anything.
pub async fn resend<M, P>(
    state: web::Data<AppState<M, P>>,
    request: web::Json<ResendCodeRequest>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state.verification.resend_code(&request.email).await {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success(SendCodeResponse {
            message: "Verification code resent successfully".to_string(),
            expires_in: result.expires_in_seconds,
            resend_after: result.expires_in_seconds,
        })),
        Err(error) => handle_domain_error(error),
    }
}
