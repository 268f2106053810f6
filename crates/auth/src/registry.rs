//! The immutable role registry and its query surface.
//!
//! Every query is total: unknown role codes resolve to the `citizen`
//! descriptor, unknown feature names read as `false`. Validation of role
//! claims themselves (e.g. rejecting forged claims) belongs to the
//! authentication collaborator, not here.

use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use gridwatch_core::Role;

use crate::descriptor::{RoleDescriptor, builtin_descriptors};
use crate::matcher;
use crate::pages::{EventListConfig, HomePageConfig};
use crate::ui::UiElement;

/// Navigation shown for descriptors that carry no navigation list.
const DEFAULT_NAVIGATION: &[&str] = &["home", "profile"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate role code '{0}'")]
    DuplicateRole(String),

    #[error("registry is missing the default role 'citizen'")]
    MissingDefaultRole,
}

/// Projection of one registered role for listings/admin display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleSummary {
    pub code: Role,
    pub name: &'static str,
    /// Literal entry count — wildcards count as one entry each.
    pub permission_count: usize,
}

/// Immutable mapping from role code to descriptor, fixed at construction.
///
/// Descriptors keep their definition order (lowest tier first for the
/// built-in table). The registry is read-only shared state: queries are pure
/// functions of the table and their arguments, so concurrent readers need no
/// locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleRegistry {
    descriptors: Vec<RoleDescriptor>,
}

impl RoleRegistry {
    /// Build the fixed reference configuration.
    pub fn builtin() -> Self {
        let registry = Self {
            descriptors: builtin_descriptors(),
        };
        registry.warn_on_non_monotonic_tiers();
        info!(roles = registry.descriptors.len(), "role registry initialized");
        registry
    }

    /// Checked constructor for caller-supplied tables.
    ///
    /// Rejects duplicate role codes and tables without a `citizen` entry
    /// (the fallback target must exist). Non-monotonic tiers are reported
    /// via `warn!` but accepted, matching the behavior of the built-in path.
    pub fn from_descriptors(descriptors: Vec<RoleDescriptor>) -> Result<Self, RegistryError> {
        for (i, descriptor) in descriptors.iter().enumerate() {
            if descriptors[..i].iter().any(|d| d.code == descriptor.code) {
                return Err(RegistryError::DuplicateRole(
                    descriptor.code.as_str().to_string(),
                ));
            }
        }
        if !descriptors.iter().any(|d| d.code == Role::CITIZEN) {
            return Err(RegistryError::MissingDefaultRole);
        }

        let registry = Self { descriptors };
        registry.warn_on_non_monotonic_tiers();
        Ok(registry)
    }

    /// Process-wide shared instance of the built-in table.
    ///
    /// Explicit read-only value behind `OnceLock`, initialized on first use;
    /// prefer passing `&RoleRegistry` where wiring allows.
    pub fn shared() -> &'static RoleRegistry {
        static SHARED: OnceLock<RoleRegistry> = OnceLock::new();
        SHARED.get_or_init(RoleRegistry::builtin)
    }

    /// Resolve a role code to its descriptor.
    ///
    /// Unknown codes degrade to the `citizen` descriptor (minimum privilege)
    /// rather than failing.
    pub fn resolve(&self, role: &Role) -> &RoleDescriptor {
        self.descriptor_of(role)
            .or_else(|| self.descriptor_of(&Role::CITIZEN))
            .expect("constructors guarantee a citizen descriptor")
    }

    fn descriptor_of(&self, role: &Role) -> Option<&RoleDescriptor> {
        self.descriptors.iter().find(|d| &d.code == role)
    }

    /// Whether `role` is granted `permission` (exact, prefix-wildcard, or
    /// super-wildcard match).
    pub fn has_permission(&self, role: &Role, permission: &str) -> bool {
        matcher::grants(&self.resolve(role).permissions, permission)
    }

    /// Navigation sections visible to `role`, in descriptor order.
    pub fn navigation_items(&self, role: &Role) -> &[&'static str] {
        self.resolve(role)
            .navigation
            .as_deref()
            .unwrap_or(DEFAULT_NAVIGATION)
    }

    /// Exact-key feature-flag lookup; absent flags read as `false`.
    /// No wildcard semantics apply to feature names.
    pub fn can_access_feature(&self, role: &Role, feature: &str) -> bool {
        self.resolve(role)
            .features
            .get(feature)
            .copied()
            .unwrap_or(false)
    }

    /// Stable filter over UI elements: elements without a required
    /// permission always pass; the rest pass iff the role holds the
    /// permission. Input order is preserved.
    pub fn filter_ui_elements(&self, role: &Role, elements: Vec<UiElement>) -> Vec<UiElement> {
        let permissions = &self.resolve(role).permissions;
        elements
            .into_iter()
            .filter(|element| match &element.required_permission {
                Some(required) => matcher::grants(permissions, required.as_str()),
                None => true,
            })
            .collect()
    }

    /// Home-page layout flags for `role` (tier-derived, citizen fallback).
    pub fn home_page_config(&self, role: &Role) -> HomePageConfig {
        HomePageConfig::for_tier(self.resolve(role).tier)
    }

    /// Event-list layout flags for `role` (tier-derived, citizen fallback).
    pub fn event_list_config(&self, role: &Role) -> EventListConfig {
        EventListConfig::for_tier(self.resolve(role).tier)
    }

    /// Display name for `role`.
    pub fn role_name(&self, role: &Role) -> &str {
        self.resolve(role).name
    }

    /// All registered roles in definition order.
    pub fn list_roles(&self) -> Vec<RoleSummary> {
        self.descriptors
            .iter()
            .map(|d| RoleSummary {
                code: d.code.clone(),
                name: d.name,
                permission_count: d.permissions.len(),
            })
            .collect()
    }

    /// Report tier pairs where a role does not cover everything the
    /// previous (lower) role's list grants. Diagnostic only; the table is
    /// accepted either way.
    fn warn_on_non_monotonic_tiers(&self) {
        for pair in self.descriptors.windows(2) {
            let (lower, higher) = (&pair[0], &pair[1]);
            for entry in &lower.permissions {
                if !matcher::grants(&higher.permissions, entry.as_str()) {
                    warn!(
                        lower = %lower.code,
                        higher = %higher.code,
                        permission = %entry,
                        "role tier is not a superset of the tier below"
                    );
                }
            }
        }
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwatch_core::RoleTier;

    #[test]
    fn unknown_role_resolves_to_citizen() {
        let registry = RoleRegistry::builtin();
        let unknown = registry.resolve(&Role::new("intruder"));
        assert_eq!(unknown, registry.resolve(&Role::CITIZEN));
        assert_eq!(unknown.code, Role::CITIZEN);
    }

    #[test]
    fn decision_maker_holds_every_permission() {
        let registry = RoleRegistry::builtin();
        for permission in ["event.create", "user.delete", "anything.at.all", ""] {
            assert!(registry.has_permission(&Role::DECISION_MAKER, permission));
        }
    }

    #[test]
    fn manager_wildcard_covers_event_namespace_only() {
        let registry = RoleRegistry::builtin();
        assert!(registry.has_permission(&Role::MANAGER, "event.create"));
        assert!(registry.has_permission(&Role::MANAGER, "event.delete"));
        assert!(registry.has_permission(&Role::MANAGER, "report.view"));
        assert!(!registry.has_permission(&Role::MANAGER, "user.delete"));
    }

    #[test]
    fn citizen_has_exact_grants_only() {
        let registry = RoleRegistry::builtin();
        assert!(registry.has_permission(&Role::CITIZEN, "event.create"));
        assert!(!registry.has_permission(&Role::CITIZEN, "event.view"));
    }

    #[test]
    fn citizen_navigation_order_is_preserved() {
        let registry = RoleRegistry::builtin();
        assert_eq!(
            registry.navigation_items(&Role::CITIZEN),
            ["home", "tracking", "profile"]
        );
    }

    #[test]
    fn missing_navigation_falls_back_to_minimal_default() {
        let mut descriptors = builtin_descriptors();
        descriptors[0].navigation = None;
        let registry = RoleRegistry::from_descriptors(descriptors).unwrap();
        assert_eq!(registry.navigation_items(&Role::CITIZEN), ["home", "profile"]);
    }

    #[test]
    fn feature_lookup_is_exact_key_only() {
        let registry = RoleRegistry::builtin();
        assert!(registry.can_access_feature(&Role::CITIZEN, "report_event"));
        assert!(!registry.can_access_feature(&Role::CITIZEN, "assign_crews"));
        assert!(registry.can_access_feature(&Role::MANAGER, "assign_crews"));
        // No wildcard semantics for feature names.
        assert!(!registry.can_access_feature(&Role::DECISION_MAKER, "no_such_flag"));
        assert!(!registry.can_access_feature(&Role::DECISION_MAKER, "*"));
    }

    #[test]
    fn ui_filter_keeps_unguarded_elements_and_preserves_order() {
        let registry = RoleRegistry::builtin();
        let elements = vec![
            UiElement::public("1"),
            UiElement::guarded("2", "event.view"),
        ];
        let visible = registry.filter_ui_elements(&Role::CITIZEN, elements);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn list_roles_projects_literal_permission_counts() {
        let registry = RoleRegistry::builtin();
        let summaries = registry.list_roles();
        assert_eq!(summaries.len(), 4);
        assert_eq!(
            summaries.iter().map(|s| s.code.as_str()).collect::<Vec<_>>(),
            ["citizen", "grid_worker", "manager", "decision_maker"]
        );

        let count = |code: &str| {
            summaries
                .iter()
                .find(|s| s.code.as_str() == code)
                .unwrap()
                .permission_count
        };
        assert_eq!(count("manager"), 5);
        assert_eq!(count("decision_maker"), 1);
    }

    #[test]
    fn duplicate_role_code_is_rejected() {
        let mut descriptors = builtin_descriptors();
        let mut dup = descriptors[0].clone();
        dup.name = "Citizen Copy";
        descriptors.push(dup);

        let err = RoleRegistry::from_descriptors(descriptors).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateRole("citizen".to_string()));
    }

    #[test]
    fn missing_citizen_is_rejected() {
        let descriptors: Vec<_> = builtin_descriptors()
            .into_iter()
            .filter(|d| d.code != Role::CITIZEN)
            .collect();

        let err = RoleRegistry::from_descriptors(descriptors).unwrap_err();
        assert_eq!(err, RegistryError::MissingDefaultRole);
    }

    #[test]
    fn non_monotonic_table_is_accepted() {
        // grid_worker missing a citizen grant: warned about, not rejected.
        let mut descriptors = builtin_descriptors();
        descriptors[1].permissions.retain(|p| p.as_str() != "event.create");
        let registry = RoleRegistry::from_descriptors(descriptors).unwrap();
        assert!(!registry.has_permission(&Role::GRID_WORKER, "event.create"));
    }

    #[test]
    fn page_configs_fall_back_to_citizen() {
        let registry = RoleRegistry::builtin();
        let unknown = Role::new("nobody");
        assert_eq!(
            registry.home_page_config(&unknown),
            HomePageConfig::for_tier(RoleTier::Citizen)
        );
        assert_eq!(
            registry.event_list_config(&unknown),
            EventListConfig::for_tier(RoleTier::Citizen)
        );
    }

    #[test]
    fn shared_instance_is_the_builtin_table() {
        let shared = RoleRegistry::shared();
        assert_eq!(shared.list_roles().len(), 4);
        // Same instance on every call.
        assert!(std::ptr::eq(shared, RoleRegistry::shared()));
    }

    #[test]
    fn role_names() {
        let registry = RoleRegistry::builtin();
        assert_eq!(registry.role_name(&Role::GRID_WORKER), "Grid Worker");
        assert_eq!(registry.role_name(&Role::new("unknown")), "Citizen");
    }
}
