//! Role descriptors and the built-in role table.

use std::collections::BTreeMap;

use serde::Serialize;

use gridwatch_core::{Permission, Role, RoleTier};

/// Everything the UI layer needs to know about one role.
///
/// `navigation` is optional for forward-compatibility with partially
/// specified descriptors; the registry substitutes a minimal default when it
/// is absent. All built-in roles carry an explicit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDescriptor {
    pub code: Role,
    pub tier: RoleTier,
    /// Human-readable display label.
    pub name: &'static str,
    /// Ordered permission entries: literals, trailing-`*` prefix wildcards,
    /// or the super wildcard `"*"`.
    pub permissions: Vec<Permission>,
    /// Navigation-section identifiers visible to this role.
    pub navigation: Option<Vec<&'static str>>,
    /// Feature-flag capabilities, derived from the role tier.
    pub features: BTreeMap<&'static str, bool>,
}

/// Feature flags for a tier, cumulative up the ladder.
///
/// Every flag is present in every map so that per-role capability diffs are
/// visible in serialized payloads; absent-means-false still holds for lookups.
fn features_for(tier: RoleTier) -> BTreeMap<&'static str, bool> {
    let mut features = BTreeMap::from([
        ("report_event", true),
        ("track_own_reports", true),
        ("view_all_events", false),
        ("update_event_status", false),
        ("assign_crews", false),
        ("view_reports", false),
        ("export_reports", false),
        ("view_analytics", false),
        ("manage_users", false),
    ]);

    if tier >= RoleTier::GridWorker {
        features.insert("view_all_events", true);
        features.insert("update_event_status", true);
    }
    if tier >= RoleTier::Manager {
        features.insert("assign_crews", true);
        features.insert("view_reports", true);
        features.insert("export_reports", true);
    }
    if tier >= RoleTier::DecisionMaker {
        features.insert("view_analytics", true);
        features.insert("manage_users", true);
    }

    features
}

/// The fixed reference configuration, in definition order (lowest tier
/// first). Each tier is a superset of the previous one under the matcher.
pub(crate) fn builtin_descriptors() -> Vec<RoleDescriptor> {
    vec![
        RoleDescriptor {
            code: Role::CITIZEN,
            tier: RoleTier::Citizen,
            name: "Citizen",
            permissions: vec![
                Permission::new("event.create"),
                Permission::new("tracking.view"),
                Permission::new("profile.edit"),
            ],
            navigation: Some(vec!["home", "tracking", "profile"]),
            features: features_for(RoleTier::Citizen),
        },
        RoleDescriptor {
            code: Role::GRID_WORKER,
            tier: RoleTier::GridWorker,
            name: "Grid Worker",
            permissions: vec![
                Permission::new("event.create"),
                Permission::new("event.view"),
                Permission::new("event.update_status"),
                Permission::new("tracking.view"),
                Permission::new("profile.edit"),
            ],
            navigation: Some(vec!["home", "events", "map", "profile"]),
            features: features_for(RoleTier::GridWorker),
        },
        RoleDescriptor {
            code: Role::MANAGER,
            tier: RoleTier::Manager,
            name: "Manager",
            permissions: vec![
                Permission::new("event.*"),
                Permission::new("report.view"),
                Permission::new("team.manage"),
                Permission::new("tracking.view"),
                Permission::new("profile.edit"),
            ],
            navigation: Some(vec!["home", "events", "map", "reports", "profile"]),
            features: features_for(RoleTier::Manager),
        },
        RoleDescriptor {
            code: Role::DECISION_MAKER,
            tier: RoleTier::DecisionMaker,
            name: "Decision Maker",
            permissions: vec![Permission::new("*")],
            navigation: Some(vec![
                "home",
                "events",
                "map",
                "reports",
                "analytics",
                "admin",
                "profile",
            ]),
            features: features_for(RoleTier::DecisionMaker),
        },
    ]
}
