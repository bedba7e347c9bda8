//! Service-façade tests: per-email engines, the one-live-challenge rule,
//! and end-to-end flows

use std::sync::Arc;
use std::time::Duration;

use super::mocks::{MockEmailService, RecordingHooks};
use crate::domain::entities::verification_challenge::ChallengeState;
use crate::errors::{DomainError, VerificationError};
use crate::services::verification::{VerificationConfig, VerificationService};

const EMAIL: &str = "user@example.com";

fn service(mailer: &Arc<MockEmailService>) -> VerificationService<MockEmailService> {
    VerificationService::new(Arc::clone(mailer), VerificationConfig::default())
}

#[tokio::test(start_paused = true)]
async fn test_send_code_rejects_malformed_email() {
    let mailer = Arc::new(MockEmailService::new());
    let service = service(&mailer);

    let result = service.send_code("not-an-email").await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_second_send_is_rate_limited_while_live() {
    let mailer = Arc::new(MockEmailService::new());
    let service = service(&mailer);

    service.send_code(EMAIL).await.unwrap();
    let result = service.send_code(EMAIL).await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::ResendUnavailable { .. }
        ))
    ));
    assert_eq!(mailer.sent_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_verify_unknown_email_has_no_challenge() {
    let mailer = Arc::new(MockEmailService::new());
    let service = service(&mailer);

    let result = service.verify_code("nobody@example.com", "12345").await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::ChallengeNotFound
        ))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_full_verification_flow() {
    let mailer = Arc::new(MockEmailService::new());
    let hooks = Arc::new(RecordingHooks::new());
    let hooks_dyn: Arc<dyn crate::services::verification::VerificationHooks> = hooks.clone();
    let service = VerificationService::with_hooks(
        Arc::clone(&mailer),
        VerificationConfig::default(),
        hooks_dyn,
    );

    service.send_code(EMAIL).await.unwrap();
    let code = mailer.last_code_for(EMAIL).unwrap();

    let result = service.verify_code(EMAIL, &code).await.unwrap();
    assert!(result.success);
    assert_eq!(hooks.success_count(), 1);
    assert_eq!(service.status(EMAIL).unwrap().state, ChallengeState::Verified);
}

#[tokio::test(start_paused = true)]
async fn test_resend_flow_through_service() {
    let mailer = Arc::new(MockEmailService::new());
    let service = service(&mailer);

    service.send_code(EMAIL).await.unwrap();
    tokio::time::sleep(Duration::from_secs(61)).await;
    tokio::task::yield_now().await;

    let status = service.status(EMAIL).unwrap();
    assert!(status.is_code_expired);
    assert!(status.can_resend);

    service.resend_code(EMAIL).await.unwrap();
    assert_eq!(mailer.sent_count(), 2);
    assert_eq!(service.status(EMAIL).unwrap().time_left, 60);
}

#[tokio::test(start_paused = true)]
async fn test_reset_discards_challenge() {
    let mailer = Arc::new(MockEmailService::new());
    let service = service(&mailer);

    service.send_code(EMAIL).await.unwrap();
    service.reset(EMAIL);

    assert!(matches!(
        service.status(EMAIL),
        Err(DomainError::Verification(
            VerificationError::ChallengeNotFound
        ))
    ));

    // Reopening starts clean: a fresh send is permitted immediately.
    service.send_code(EMAIL).await.unwrap();
    assert_eq!(mailer.sent_count(), 2);
    assert_eq!(service.status(EMAIL).unwrap().attempts, 0);

    // Resetting an address with no challenge is a no-op.
    service.reset("nobody@example.com");
}
