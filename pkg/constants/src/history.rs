//! History limits.

/// Maximum number of entries kept per history list (registries,
/// namespaces, secret names). The oldest entry is dropped beyond this.
pub const MAX_HISTORY: usize = 100;
