//! Domain entities

pub mod session;
pub mod verification_challenge;

pub use session::{Session, WalletKind};
pub use verification_challenge::{ChallengeState, VerificationChallenge};
