use crate::email::template::{verification_email, PRODUCT_NAME};

#[test]
fn test_subject_names_product_and_purpose() {
    let email = verification_email("54321");
    assert!(email.subject.contains(PRODUCT_NAME));
    assert!(email.subject.contains("Verification Code"));
}

#[test]
fn test_both_parts_carry_the_literal_code() {
    let email = verification_email("54321");
    assert!(email.html.contains("54321"));
    assert!(email.text.contains("54321"));
}

#[test]
fn test_body_states_sixty_second_validity() {
    let email = verification_email("54321");
    assert!(email.html.contains("expire in 60 seconds"));
    assert!(email.text.contains("expire in 60 seconds"));
}

#[test]
fn test_text_fallback_is_plain() {
    let email = verification_email("54321");
    assert!(!email.text.contains('<'));
}
