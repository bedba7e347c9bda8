use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use validator::Validate;

use r3_core::services::portfolio::PortfolioProvider;
use r3_core::services::verification::EmailService;
use r3_shared::types::ApiResponse;

use crate::dto::verification::{VerifyCodeRequest, VerifyCodeResponse};
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_verification_error;
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/verification/verify-code
///
/// Verifies a submitted code. Failure responses carry the error taxonomy:
/// 400 for an expired or mismatched code, 429 once the attempt budget is
/// exhausted, 404 when no challenge exists.
pub async fn verify_code<M, P>(
    state: web::Data<AppState<M, P>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state
        .verification
        .verify_code(&request.email, &request.code)
        .await
    {
        Ok(result) if result.success => {
            HttpResponse::Ok().json(ApiResponse::success(VerifyCodeResponse {
                verified: true,
                message: "Email verified successfully".to_string(),
            }))
        }
        Ok(result) => match result.error {
            Some(error) => handle_verification_error(error),
            None => ErrorResponse::new("verification_failed", "Verification failed")
                .to_response(StatusCode::BAD_REQUEST),
        },
        Err(error) => handle_domain_error(error),
    }
}
