use r3_core::services::verification::EmailService;

use crate::email::MockEmailService;

#[tokio::test]
async fn test_mock_dispatch_records_message() {
    let service = MockEmailService::new();

    let message_id = service
        .send_verification_code("user@example.com", "12345")
        .await
        .unwrap();
    assert!(message_id.starts_with("mock-"));
    assert_eq!(service.message_count(), 1);
    assert_eq!(
        service.last_message(),
        Some(("user@example.com".to_string(), "12345".to_string()))
    );
}

#[tokio::test]
async fn test_mock_rejects_invalid_recipient() {
    let service = MockEmailService::new();
    let result = service.send_verification_code("not-an-email", "12345").await;
    assert!(result.is_err());
    assert_eq!(service.message_count(), 0);
}

#[tokio::test]
async fn test_failing_mock_reports_error_without_panicking() {
    let service = MockEmailService::failing();
    let result = service
        .send_verification_code("user@example.com", "12345")
        .await;
    assert!(result.is_err());
    assert_eq!(service.message_count(), 0);
}

#[tokio::test]
async fn test_counter_reset() {
    let service = MockEmailService::new();
    service
        .send_verification_code("user@example.com", "12345")
        .await
        .unwrap();
    service.reset_counter();
    assert_eq!(service.message_count(), 0);
}
