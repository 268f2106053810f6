//! `gridwatch-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! role identifiers, permission tokens, and the canonical role-tier ladder.

pub mod permission;
pub mod role;
pub mod tier;

pub use permission::Permission;
pub use role::Role;
pub use tier::RoleTier;
