//! Password value object.
//!
//! Passwords are kept verbatim and compared with exact string equality.
//! There is no hashing or normalization: `"Secret"` and `"secret"` differ.

use crate::constants::REDACTED;

/// Plaintext password value object.
///
/// Compared by value. The secret never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    plain: String,
}

// Don't expose the secret in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password").field("plain", &REDACTED).finish()
    }
}

impl Password {
    /// Wrap a plaintext password as stored.
    pub fn new(plain: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
        }
    }

    /// Get the stored password.
    pub fn as_str(&self) -> &str {
        &self.plain
    }

    /// Check a candidate against the stored password (exact, case-sensitive).
    pub fn matches(&self, candidate: &str) -> bool {
        self.plain == candidate
    }
}

impl From<&str> for Password {
    fn from(plain: &str) -> Self {
        Password::new(plain)
    }
}

impl From<String> for Password {
    fn from(plain: String) -> Self {
        Password::new(plain)
    }
}
