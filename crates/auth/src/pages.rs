//! Per-role page layout flags, derived from the canonical tier ladder.
//!
//! These are presentation hints only. They intentionally overlap with the
//! descriptor feature flags; deriving both from [`RoleTier`] keeps the two
//! tables from drifting apart.

use serde::{Deserialize, Serialize};

use gridwatch_core::RoleTier;

/// Flat layout flags for the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePageConfig {
    pub show_report_button: bool,
    pub show_my_reports: bool,
    pub show_area_summary: bool,
    pub show_team_overview: bool,
    pub show_kpi_dashboard: bool,
}

impl HomePageConfig {
    pub fn for_tier(tier: RoleTier) -> Self {
        Self {
            show_report_button: true,
            show_my_reports: true,
            show_area_summary: tier >= RoleTier::GridWorker,
            show_team_overview: tier >= RoleTier::Manager,
            show_kpi_dashboard: tier >= RoleTier::DecisionMaker,
        }
    }
}

/// Flat layout flags for the event list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventListConfig {
    /// Whether the list shows all events or only the user's own reports.
    pub show_all_events: bool,
    pub show_status_filter: bool,
    pub show_assignee_column: bool,
    pub show_priority_column: bool,
    pub allow_bulk_actions: bool,
}

impl EventListConfig {
    pub fn for_tier(tier: RoleTier) -> Self {
        Self {
            show_all_events: tier >= RoleTier::GridWorker,
            show_status_filter: true,
            show_assignee_column: tier >= RoleTier::GridWorker,
            show_priority_column: tier >= RoleTier::Manager,
            allow_bulk_actions: tier >= RoleTier::Manager,
        }
    }
}
