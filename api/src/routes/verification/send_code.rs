use actix_web::{web, HttpResponse};
use validator::Validate;

use r3_core::services::portfolio::PortfolioProvider;
use r3_core::services::verification::EmailService;
use r3_shared::types::ApiResponse;

use crate::dto::verification::{SendCodeRequest, SendCodeResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/verification/send-code
///
/// Creates a verification challenge for the email address and dispatches
/// its code. Rejected with 429 while a previous code for the address is
/// still live.
pub async fn send_code<M, P>(
    state: web::Data<AppState<M, P>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state.verification.send_code(&request.email).await {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success(SendCodeResponse {
            message: "Verification code sent successfully".to_string(),
            expires_in: result.expires_in_seconds,
            resend_after: result.expires_in_seconds,
        })),
        Err(error) => handle_domain_error(error),
    }
}
