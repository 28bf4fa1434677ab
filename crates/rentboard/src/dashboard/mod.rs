//! Role-aware rental application dashboard: domain records, shared query
//! evaluation, aggregate statistics, role projection, and command handling.

pub mod applications;
pub mod fixtures;
pub mod format;
pub mod roles;
pub mod roster;

pub use roles::{card_view, ApplicationCardView, DashboardAction, RoleView};
