//! Pure permission-matching over a literal permission list.
//!
//! Kept free of registry state so the matching rules are unit-testable in
//! isolation. Matching is a union: any entry satisfying its rule grants
//! access, and entry order never changes the result.

use gridwatch_core::Permission;

/// Decide whether `requested` is granted by `permissions`.
///
/// Rules, all case-sensitive with no normalization:
/// - an exact `"*"` entry grants everything;
/// - a trailing-`*` entry grants any `requested` starting with the stripped
///   prefix (`"event.*"` grants `"event.create"`);
/// - a literal entry grants only an exactly equal `requested`.
///
/// An empty list grants nothing.
pub fn grants(permissions: &[Permission], requested: &str) -> bool {
    if permissions.iter().any(Permission::is_super_wildcard) {
        return true;
    }

    permissions.iter().any(|entry| match entry.prefix_wildcard() {
        Some(prefix) => requested.starts_with(prefix),
        None => entry.as_str() == requested,
    })
}
