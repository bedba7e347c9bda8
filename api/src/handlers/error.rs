//! Mapping from domain errors to HTTP responses

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;

use r3_core::errors::{DomainError, VerificationError};

use crate::dto::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::warn!("Domain error: {:?}", error);

    match error {
        DomainError::Validation { message } => {
            ErrorResponse::new("validation_error", message).to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::NotFound { resource } => {
            ErrorResponse::new("not_found", format!("{} not found", resource))
                .to_response(StatusCode::NOT_FOUND)
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            ErrorResponse::new("internal_error", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DomainError::Verification(verification) => handle_verification_error(verification),
    }
}

/// Convert a verification failure into the appropriate HTTP response
pub fn handle_verification_error(error: VerificationError) -> HttpResponse {
    let message = error.to_string();
    match error {
        VerificationError::EmailSendFailure => ErrorResponse::new("email_send_failure", message)
            .to_response(StatusCode::SERVICE_UNAVAILABLE),
        VerificationError::CodeExpired => {
            ErrorResponse::new("code_expired", message).to_response(StatusCode::BAD_REQUEST)
        }
        VerificationError::InvalidCode { remaining } => {
            ErrorResponse::new("invalid_code", message)
                .with_details(serde_json::json!({ "remaining_attempts": remaining }))
                .to_response(StatusCode::BAD_REQUEST)
        }
        VerificationError::AttemptsExhausted => ErrorResponse::new("attempts_exhausted", message)
            .to_response(StatusCode::TOO_MANY_REQUESTS),
        VerificationError::ResendUnavailable { seconds_remaining } => {
            ErrorResponse::new("resend_unavailable", message)
                .with_details(serde_json::json!({ "seconds_remaining": seconds_remaining }))
                .to_response(StatusCode::TOO_MANY_REQUESTS)
        }
        VerificationError::ChallengeNotFound => {
            ErrorResponse::new("challenge_not_found", message).to_response(StatusCode::NOT_FOUND)
        }
    }
}

/// Convert DTO validation failures into a 400 response with field details
pub fn validation_error_response(errors: ValidationErrors) -> HttpResponse {
    log::warn!("Request validation failed: {:?}", errors);
    ErrorResponse::new("validation_error", "Invalid request data")
        .with_details(serde_json::json!(errors))
        .to_response(StatusCode::BAD_REQUEST)
}
