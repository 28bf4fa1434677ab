use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use super::super::roles::{card_view, ApplicationCardView, DashboardAction, RoleView};
use super::super::roster::{self, RosterExportError};
use super::domain::{Application, ApplicationId, ApplicationStatus, Priority};
use super::query::{self, CriteriaError, FilterRequest};
use super::repository::{
    ApplicationRepository, ContactChannel, ContactError, ContactMessage, ContactRecipient,
    RepositoryError, RoleScope,
};
use super::stats::{application_stats, ApplicationStats};

/// Errors raised by role/transition validation of dashboard commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("role '{role}' is not allowed to {action}")]
    NotPermitted { role: &'static str, action: &'static str },
    #[error("application {application_id} is already {status} and cannot change further")]
    InvalidTransition {
        application_id: String,
        status: &'static str,
    },
}

/// Error raised by the dashboard service facade.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Criteria(#[from] CriteriaError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error(transparent)]
    Export(#[from] RosterExportError),
}

/// Query result: role-projected cards plus the scope's pre-filter total.
#[derive(Debug, Serialize)]
pub struct QueryOutcome {
    pub role: RoleView,
    pub total: usize,
    pub matched: usize,
    pub cards: Vec<ApplicationCardView>,
}

/// Facade composing the repository and contact channel behind every role
/// view. All three dashboards go through the same evaluation path; the role
/// only changes projection and permitted actions.
pub struct DashboardService<R, C> {
    repository: Arc<R>,
    contact: Arc<C>,
}

impl<R, C> DashboardService<R, C>
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    pub fn new(repository: Arc<R>, contact: Arc<C>) -> Self {
        Self {
            repository,
            contact,
        }
    }

    /// Filter, sort, and project the scoped record set for one role view.
    pub fn query(
        &self,
        role: RoleView,
        scope: &RoleScope,
        request: FilterRequest,
    ) -> Result<QueryOutcome, DashboardError> {
        let criteria = request.parse()?;
        let records = self.repository.list(scope)?;
        let total = records.len();
        let matched = query::evaluate(records, &criteria);
        debug!(
            role = role.label(),
            total,
            matched = matched.len(),
            "dashboard query evaluated"
        );

        Ok(QueryOutcome {
            role,
            total,
            matched: matched.len(),
            cards: matched
                .iter()
                .map(|application| card_view(application, role))
                .collect(),
        })
    }

    /// Aggregate statistics over the scope's full (unfiltered) record set.
    pub fn stats(&self, scope: &RoleScope) -> Result<ApplicationStats, DashboardError> {
        let records = self.repository.list(scope)?;
        Ok(application_stats(&records))
    }

    pub fn accept(
        &self,
        role: RoleView,
        id: &ApplicationId,
        on: NaiveDate,
    ) -> Result<Application, DashboardError> {
        self.transition(role, DashboardAction::Accept, id, ApplicationStatus::Accepted, on)
    }

    pub fn reject(
        &self,
        role: RoleView,
        id: &ApplicationId,
        on: NaiveDate,
    ) -> Result<Application, DashboardError> {
        self.transition(role, DashboardAction::Reject, id, ApplicationStatus::Rejected, on)
    }

    pub fn cancel(
        &self,
        role: RoleView,
        id: &ApplicationId,
        on: NaiveDate,
    ) -> Result<Application, DashboardError> {
        self.transition(role, DashboardAction::Cancel, id, ApplicationStatus::Cancelled, on)
    }

    fn transition(
        &self,
        role: RoleView,
        action: DashboardAction,
        id: &ApplicationId,
        target: ApplicationStatus,
        on: NaiveDate,
    ) -> Result<Application, DashboardError> {
        if !role.permits(action) {
            return Err(CommandError::NotPermitted {
                role: role.label(),
                action: action.label(),
            }
            .into());
        }

        let mut application = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        if application.status.is_terminal() {
            return Err(CommandError::InvalidTransition {
                application_id: id.0.clone(),
                status: application.status.label(),
            }
            .into());
        }

        application.status = target;
        application.updated_on = on;
        self.repository.update(application.clone())?;

        info!(
            application_id = %id.0,
            role = role.label(),
            action = action.label(),
            status = target.label(),
            "application command applied"
        );
        Ok(application)
    }

    /// Agency-side priority adjustment. Priority is handling metadata, so it
    /// stays editable regardless of workflow status.
    pub fn set_priority(
        &self,
        role: RoleView,
        id: &ApplicationId,
        priority: Priority,
        on: NaiveDate,
    ) -> Result<Application, DashboardError> {
        if !role.permits(DashboardAction::SetPriority) {
            return Err(CommandError::NotPermitted {
                role: role.label(),
                action: DashboardAction::SetPriority.label(),
            }
            .into());
        }

        let mut application = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        application.priority = priority;
        application.updated_on = on;
        self.repository.update(application.clone())?;

        info!(
            application_id = %id.0,
            priority = priority.label(),
            "application priority updated"
        );
        Ok(application)
    }

    /// Route a message through the contact channel. Tenants reach the listing
    /// agent; owners and the agency reach the applicant.
    pub fn contact(
        &self,
        role: RoleView,
        id: &ApplicationId,
        body: String,
    ) -> Result<ContactMessage, DashboardError> {
        if !role.permits(DashboardAction::Contact) {
            return Err(CommandError::NotPermitted {
                role: role.label(),
                action: DashboardAction::Contact.label(),
            }
            .into());
        }

        // The record must exist before anything is dispatched.
        self.repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let recipient = match role {
            RoleView::Tenant => ContactRecipient::Agent,
            RoleView::Owner | RoleView::Agency => ContactRecipient::Applicant,
        };
        let message = ContactMessage {
            application_id: id.clone(),
            from_role: role,
            recipient,
            body,
        };
        self.contact.send(message.clone())?;

        info!(
            application_id = %id.0,
            role = role.label(),
            recipient = ?recipient,
            "contact message dispatched"
        );
        Ok(message)
    }

    /// CSV export of the filtered scope, agency-only.
    pub fn export_csv(
        &self,
        role: RoleView,
        scope: &RoleScope,
        request: FilterRequest,
    ) -> Result<String, DashboardError> {
        if !role.permits(DashboardAction::ExportCsv) {
            return Err(CommandError::NotPermitted {
                role: role.label(),
                action: DashboardAction::ExportCsv.label(),
            }
            .into());
        }

        let criteria = request.parse()?;
        let records = self.repository.list(scope)?;
        let matched = query::evaluate(records, &criteria);
        Ok(roster::export_csv(&matched)?)
    }
}
