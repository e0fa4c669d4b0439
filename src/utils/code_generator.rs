//! Short code generation.
//!
//! Candidate codes are fixed-length, URL-safe, and drawn from a
//! cryptographically secure random source.

use base64::Engine as _;

/// Length of a short code in characters.
pub const CODE_LENGTH: usize = 6;

/// Source of candidate short codes for the allocator.
///
/// The allocator retries with a fresh candidate on every collision, so the
/// generation strategy is kept behind a trait: production uses
/// [`RandomCodeGenerator`], tests substitute deterministic sequences to
/// exercise the collision path.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a new candidate short code.
    fn generate(&self) -> String;
}

/// Generates a cryptographically secure random short code.
///
/// Draws [`CODE_LENGTH`] random bytes via `getrandom`, encodes them as
/// URL-safe base64 without padding, and keeps the first [`CODE_LENGTH`]
/// characters. Each kept character consumes 6 previously unused random bits,
/// so the result is uniform over the 64-symbol alphabet
/// (`A-Z a-z 0-9 - _`).
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    code.truncate(CODE_LENGTH);
    code
}

/// Default production generator backed by [`generate_code`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}
