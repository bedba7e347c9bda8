//! Verification email template.
//!
//! Fixed subject and body; the body always ships an HTML part and a
//! plain-text fallback, both embedding the literal code and the stated
//! 60-second validity window.

/// Product name used in the subject and body
pub const PRODUCT_NAME: &str = "Restor3";

/// Rendered parts of one verification email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Render the verification email for a code
pub fn verification_email(code: &str) -> VerificationEmail {
    VerificationEmail {
        subject: format!("Your {} Verification Code", PRODUCT_NAME),
        html: html_body(code),
        text: text_body(code),
    }
}

fn html_body(code: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="text-align: center; margin-bottom: 30px;">
    <h1 style="color: #059669; font-size: 28px; margin: 0;">{product}</h1>
    <p style="color: #6b7280; margin: 5px 0 0 0;">Email Verification</p>
  </div>

  <div style="background: #f9fafb; border-radius: 8px; padding: 30px; margin-bottom: 20px;">
    <h2 style="color: #111827; margin: 0 0 15px 0; font-size: 20px;">Your Verification Code</h2>
    <p style="color: #6b7280; margin: 0 0 20px 0; line-height: 1.5;">
      Please use the following verification code to complete your email verification:
    </p>

    <div style="background: white; border: 2px solid #059669; border-radius: 8px; padding: 20px; text-align: center; margin: 20px 0;">
      <span style="font-size: 32px; font-weight: bold; color: #059669; letter-spacing: 5px; font-family: 'Courier New', monospace;">
        {code}
      </span>
    </div>

    <p style="color: #6b7280; margin: 20px 0 0 0; font-size: 14px;">
      This code will expire in 60 seconds for security reasons.
    </p>
  </div>

  <div style="text-align: center; margin-top: 30px;">
    <p style="color: #9ca3af; font-size: 12px; margin: 0;">
      If you didn't request this verification code, please ignore this email.
    </p>
    <p style="color: #9ca3af; font-size: 12px; margin: 5px 0 0 0;">
      This is an automated message, please do not reply to this email.
    </p>
  </div>
</div>"#,
        product = PRODUCT_NAME,
        code = code,
    )
}

fn text_body(code: &str) -> String {
    format!(
        "{product} - Email Verification\n\n\
         Your verification code is: {code}\n\n\
         This code will expire in 60 seconds for security reasons.\n\n\
         If you didn't request this verification code, please ignore this email.",
        product = PRODUCT_NAME,
        code = code,
    )
}
