//! Domain-level constants.

// =============================================================================
// Operation symbols
// =============================================================================

/// Canonical name of the addition operation
pub const OP_ADD: &str = "add";

/// Canonical name of the subtraction operation
pub const OP_SUBTRACT: &str = "subtract";

/// Canonical name of the multiplication operation
pub const OP_MULTIPLY: &str = "multiply";

/// Canonical name of the division operation
pub const OP_DIVIDE: &str = "divide";

// =============================================================================
// Logging
// =============================================================================

/// Placeholder written instead of a password in debug output
pub const REDACTED: &str = "[REDACTED]";
