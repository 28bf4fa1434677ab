//! Rental application records and the shared query, statistics, and command
//! pipeline behind every role view.

pub mod commands;
pub mod domain;
pub mod query;
pub mod repository;
pub mod router;
pub mod stats;

#[cfg(test)]
mod tests;

pub use commands::{CommandError, DashboardError, DashboardService, QueryOutcome};
pub use domain::{
    ApplicantId, ApplicantSummary, Application, ApplicationId, ApplicationStatus, DocumentFile,
    DocumentKind, DocumentsStatus, Priority, PropertyId, PropertySummary, PropertyType,
    UnknownLabel,
};
pub use query::{
    sort_applications, CriteriaError, FilterCriteria, FilterRequest, SortDirection, SortKey,
    VisitedFilter,
};
pub use repository::{
    ApplicationRepository, ContactChannel, ContactError, ContactMessage, ContactRecipient,
    RepositoryError, RoleScope,
};
pub use router::{
    dashboard_router, CommandRequest, ContactRequest, DashboardQueryRequest, PriorityRequest,
};
pub use stats::{application_stats, ApplicationStats, DocumentsCount, StatusCount};
