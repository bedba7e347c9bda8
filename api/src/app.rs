//! Application factory
//!
//! Builds the Actix-web application with all routes and middleware wired
//! against an `AppState`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use r3_core::services::portfolio::PortfolioProvider;
use r3_core::services::verification::EmailService;

use crate::middleware::{cors::create_cors, security::SecurityHeaders};
use crate::routes::{portfolio, session, verification, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<M, P>(
    app_state: web::Data<AppState<M, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    let cors = create_cors();
    let security = SecurityHeaders::new();

    App::new()
        .app_data(app_state)
        // Order matters: security first, then CORS, then logging
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/verification")
                        .route("/send-code", web::post().to(verification::send_code::<M, P>))
                        .route(
                            "/verify-code",
                            web::post().to(verification::verify_code::<M, P>),
                        )
                        .route("/resend", web::post().to(verification::resend::<M, P>))
                        .route("/reset", web::post().to(verification::reset::<M, P>))
                        .route("/status", web::get().to(verification::status::<M, P>)),
                )
                .service(
                    web::scope("/session")
                        .route("", web::post().to(session::establish::<M, P>))
                        .route("/{user_id}", web::get().to(session::get_session::<M, P>))
                        .route(
                            "/{user_id}/wallets",
                            web::post().to(session::link_wallet::<M, P>),
                        )
                        .route(
                            "/{user_id}/sign-out",
                            web::post().to(session::sign_out::<M, P>),
                        ),
                )
                .service(
                    web::scope("/portfolio")
                        .route("/overview", web::get().to(portfolio::overview::<M, P>))
                        .route("/airdrops", web::get().to(portfolio::airdrops::<M, P>))
                        .route(
                            "/defi-details",
                            web::get().to(portfolio::defi_details::<M, P>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "restor3-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
