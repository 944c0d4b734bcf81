// Route prefix constants - single source of truth for request classification.
// Matching is by prefix ("/healthz" counts as a health check), so these are
// prefixes, not exact paths.

pub const HEALTH: &str = "/health";
pub const STATUS: &str = "/api/status";
