use serde::{Deserialize, Serialize};

/// Canonical role-tier ladder.
///
/// Each tier is intended to be a superset of the previous one. The tier is
/// the single source the per-role UI tables (features, home page, event list)
/// derive from, instead of three independently maintained literal tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
    Citizen,
    GridWorker,
    Manager,
    DecisionMaker,
}

impl RoleTier {
    /// All tiers, lowest privilege first.
    pub const ALL: [RoleTier; 4] = [
        RoleTier::Citizen,
        RoleTier::GridWorker,
        RoleTier::Manager,
        RoleTier::DecisionMaker,
    ];

    /// The tier directly below this one, if any.
    pub fn previous(self) -> Option<RoleTier> {
        match self {
            RoleTier::Citizen => None,
            RoleTier::GridWorker => Some(RoleTier::Citizen),
            RoleTier::Manager => Some(RoleTier::GridWorker),
            RoleTier::DecisionMaker => Some(RoleTier::Manager),
        }
    }
}

impl core::fmt::Display for RoleTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RoleTier::Citizen => write!(f, "citizen"),
            RoleTier::GridWorker => write!(f, "grid_worker"),
            RoleTier::Manager => write!(f, "manager"),
            RoleTier::DecisionMaker => write!(f, "decision_maker"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(RoleTier::Citizen < RoleTier::GridWorker);
        assert!(RoleTier::GridWorker < RoleTier::Manager);
        assert!(RoleTier::Manager < RoleTier::DecisionMaker);
    }

    #[test]
    fn previous_walks_down_the_ladder() {
        assert_eq!(RoleTier::Citizen.previous(), None);
        assert_eq!(RoleTier::DecisionMaker.previous(), Some(RoleTier::Manager));
    }
}
