//! Input validation utilities for email addresses and wallet addresses

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Intentionally loose: one non-whitespace local part, an @, a domain
    // with at least one dot. Deliverability is the mail relay's problem.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});

static WALLET_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("wallet address regex must compile")
});

/// Check whether a string is a plausible email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check whether a string is a well-formed EVM wallet address
/// (0x followed by 40 hex characters)
pub fn is_valid_wallet_address(address: &str) -> bool {
    WALLET_ADDRESS_REGEX.is_match(address)
}

/// Mask an email address for logging: keeps the first character of the
/// local part and the full domain (`j***@example.com`)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = &local[..local
                .char_indices()
                .nth(1)
                .map(|(i, _)| i)
                .unwrap_or(local.len())];
            format!("{}***@{}", first, domain)
        }
        _ => String::from("***"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("has space@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_valid_wallet_address() {
        assert!(is_valid_wallet_address(
            "0x52908400098527886E0F7030069857D2E4169EE7"
        ));
        assert!(is_valid_wallet_address(
            "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"
        ));
    }

    #[test]
    fn test_invalid_wallet_address() {
        assert!(!is_valid_wallet_address("0x123")); // too short
        assert!(!is_valid_wallet_address(
            "52908400098527886E0F7030069857D2E4169EE7"
        )); // missing prefix
        assert!(!is_valid_wallet_address(
            "0xZZ908400098527886E0F7030069857D2E4169EE7"
        )); // non-hex
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("john@example.com"), "j***@example.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
