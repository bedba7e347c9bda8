//! Session and wallet-linking routes

use actix_web::{web, HttpResponse};
use validator::Validate;

use r3_core::services::portfolio::PortfolioProvider;
use r3_core::services::session::NewSession;
use r3_core::services::verification::EmailService;
use r3_shared::types::ApiResponse;

use crate::dto::session::{EstablishSessionRequest, LinkWalletRequest, SignOutResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/session
///
/// Records an OAuth sign-in result as an established session. The
/// identity provider interaction itself happens upstream; this endpoint
/// only receives its opaque outcome.
pub async fn establish<M, P>(
    state: web::Data<AppState<M, P>>,
    request: web::Json<EstablishSessionRequest>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    let request = request.into_inner();
    match state.sessions.establish(NewSession {
        user_id: request.user_id,
        email: request.email,
        display_name: request.display_name,
        provider: request.provider,
    }) {
        Ok(session) => HttpResponse::Ok().json(ApiResponse::success(session)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/session/{user_id}
pub async fn get_session<M, P>(
    state: web::Data<AppState<M, P>>,
    path: web::Path<String>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    match state.sessions.get(&path.into_inner()) {
        Ok(session) => HttpResponse::Ok().json(ApiResponse::success(session)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/session/{user_id}/wallets
///
/// Links a main or backup wallet address into the session.
pub async fn link_wallet<M, P>(
    state: web::Data<AppState<M, P>>,
    path: web::Path<String>,
    request: web::Json<LinkWalletRequest>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state
        .sessions
        .link_wallet(&path.into_inner(), request.kind, &request.address)
    {
        Ok(session) => HttpResponse::Ok().json(ApiResponse::success(session)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/session/{user_id}/sign-out
pub async fn sign_out<M, P>(
    state: web::Data<AppState<M, P>>,
    path: web::Path<String>,
) -> HttpResponse
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    state.sessions.sign_out(&path.into_inner());
    HttpResponse::Ok().json(ApiResponse::success(SignOutResponse {
        message: "Signed out".to_string(),
    }))
}
