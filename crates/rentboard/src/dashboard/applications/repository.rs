use serde::{Deserialize, Serialize};

use super::super::roles::RoleView;
use super::domain::{ApplicantId, Application, ApplicationId};

/// Record scoping for the three role views. A real backend would derive this
/// from the authenticated principal; here it is passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleScope {
    Tenant { applicant_id: ApplicantId },
    Owner { owner_id: String },
    Agency { agency_id: String },
    All,
}

impl RoleScope {
    /// Narrow to the role's own records when the matching id is provided;
    /// demo surfaces may omit the id and see the whole set.
    pub fn for_role(
        role: RoleView,
        applicant_id: Option<String>,
        owner_id: Option<String>,
        agency_id: Option<String>,
    ) -> RoleScope {
        match role {
            RoleView::Tenant => applicant_id
                .map(|id| RoleScope::Tenant {
                    applicant_id: ApplicantId(id),
                })
                .unwrap_or(RoleScope::All),
            RoleView::Owner => owner_id
                .map(|id| RoleScope::Owner { owner_id: id })
                .unwrap_or(RoleScope::All),
            RoleView::Agency => agency_id
                .map(|id| RoleScope::Agency { agency_id: id })
                .unwrap_or(RoleScope::All),
        }
    }

    pub fn covers(&self, application: &Application) -> bool {
        match self {
            RoleScope::Tenant { applicant_id } => {
                application.applicant.applicant_id == *applicant_id
            }
            RoleScope::Owner { owner_id } => application.owner_id == *owner_id,
            RoleScope::Agency { agency_id } => application.agency_id == *agency_id,
            RoleScope::All => true,
        }
    }
}

/// Storage abstraction so the dashboard service can be exercised in isolation
/// and swapped onto real persistence later. `list` must return records in
/// submission order so filtering preserves a meaningful relative order.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError>;
    fn update(&self, application: Application) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
    fn list(&self, scope: &RoleScope) -> Result<Vec<Application>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound messaging seam standing where a real mail/SMS integration would
/// plug in.
pub trait ContactChannel: Send + Sync {
    fn send(&self, message: ContactMessage) -> Result<(), ContactError>;
}

/// Who a contact action addresses, derived from the acting role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactRecipient {
    Agent,
    Applicant,
}

/// Message payload handed to the contact channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub application_id: ApplicationId,
    pub from_role: RoleView,
    pub recipient: ContactRecipient,
    pub body: String,
}

/// Contact dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact transport unavailable: {0}")]
    Transport(String),
}
