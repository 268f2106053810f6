//! `gridwatch-auth` — role registry and permission matcher (UI hint layer).
//!
//! This crate answers authorization-*hint* queries against a fixed role
//! table: which navigation sections, UI elements, and features a role may
//! see. It is not an enforcement boundary — the server decides what a user
//! may actually do. The crate is intentionally decoupled from HTTP, storage,
//! and session handling; callers pass in the authenticated user's role code.

pub mod descriptor;
pub mod matcher;
pub mod pages;
pub mod registry;
pub mod ui;

pub use descriptor::RoleDescriptor;
pub use pages::{EventListConfig, HomePageConfig};
pub use registry::{RegistryError, RoleRegistry, RoleSummary};
pub use ui::UiElement;
