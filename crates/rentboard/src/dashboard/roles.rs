use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::applications::domain::{Application, ApplicationStatus, UnknownLabel};
use super::format::{format_currency, format_date};

/// One of the three fixed presentational contexts showing the same underlying
/// application data with different available actions and visible fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleView {
    Tenant,
    Owner,
    Agency,
}

impl RoleView {
    pub const fn label(self) -> &'static str {
        match self {
            RoleView::Tenant => "tenant",
            RoleView::Owner => "owner",
            RoleView::Agency => "agency",
        }
    }

    pub fn ordered() -> [RoleView; 3] {
        [RoleView::Tenant, RoleView::Owner, RoleView::Agency]
    }

    pub const fn allowed_actions(self) -> &'static [DashboardAction] {
        match self {
            RoleView::Tenant => &[DashboardAction::Cancel, DashboardAction::Contact],
            RoleView::Owner => &[
                DashboardAction::Accept,
                DashboardAction::Reject,
                DashboardAction::Contact,
            ],
            RoleView::Agency => &[
                DashboardAction::Accept,
                DashboardAction::Reject,
                DashboardAction::SetPriority,
                DashboardAction::Contact,
                DashboardAction::ExportCsv,
            ],
        }
    }

    pub fn permits(self, action: DashboardAction) -> bool {
        self.allowed_actions().contains(&action)
    }

    /// Tenants never see the financial screening columns.
    pub const fn shows_financials(self) -> bool {
        !matches!(self, RoleView::Tenant)
    }

    /// Internal handling priority is hidden from tenants.
    pub const fn shows_priority(self) -> bool {
        !matches!(self, RoleView::Tenant)
    }

    /// Owners only see applicant contact details once an application is
    /// accepted; the agency always sees them, tenants never do.
    pub fn shows_contact_details(self, status: ApplicationStatus) -> bool {
        match self {
            RoleView::Tenant => false,
            RoleView::Owner => status == ApplicationStatus::Accepted,
            RoleView::Agency => true,
        }
    }
}

impl FromStr for RoleView {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tenant" => Ok(Self::Tenant),
            "owner" => Ok(Self::Owner),
            "agency" => Ok(Self::Agency),
            other => Err(UnknownLabel {
                field: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// State-changing or outbound actions a role view can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardAction {
    Accept,
    Reject,
    Cancel,
    SetPriority,
    Contact,
    ExportCsv,
}

impl DashboardAction {
    pub const fn label(self) -> &'static str {
        match self {
            DashboardAction::Accept => "accept",
            DashboardAction::Reject => "reject",
            DashboardAction::Cancel => "cancel",
            DashboardAction::SetPriority => "set_priority",
            DashboardAction::Contact => "contact",
            DashboardAction::ExportCsv => "export_csv",
        }
    }
}

/// Role-projected application record. Fields the role may not see are omitted
/// from the serialized payload entirely rather than blanked.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationCardView {
    pub application_id: String,
    pub property_id: String,
    pub property_title: String,
    pub property_address: String,
    pub property_type_label: &'static str,
    pub rent_display: String,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub documents_status_label: &'static str,
    pub submitted_on: String,
    pub updated_on: String,
    pub agent_name: String,
    pub visited: bool,
    pub applicant_name: String,
    pub document_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<&'static str>,
    pub actions: Vec<&'static str>,
}

pub fn card_view(application: &Application, role: RoleView) -> ApplicationCardView {
    let contact_visible = role.shows_contact_details(application.status);
    let financials_visible = role.shows_financials();

    ApplicationCardView {
        application_id: application.application_id.0.clone(),
        property_id: application.property.property_id.0.clone(),
        property_title: application.property.title.clone(),
        property_address: application.property.address.clone(),
        property_type_label: application.property.property_type.label(),
        rent_display: format_currency(u64::from(application.property.monthly_rent)),
        status: application.status,
        status_label: application.status.label(),
        documents_status_label: application.documents_status.label(),
        submitted_on: format_date(application.submitted_on),
        updated_on: format_date(application.updated_on),
        agent_name: application.agent_name.clone(),
        visited: application.visited,
        applicant_name: application.applicant.full_name.clone(),
        document_count: application.documents.len(),
        applicant_email: contact_visible.then(|| application.applicant.email.clone()),
        applicant_phone: contact_visible.then(|| application.applicant.phone.clone()),
        income_display: financials_visible
            .then(|| format_currency(u64::from(application.applicant.monthly_income))),
        credit_score: if financials_visible {
            application.applicant.credit_score
        } else {
            None
        },
        priority_label: role.shows_priority().then(|| application.priority.label()),
        actions: role
            .allowed_actions()
            .iter()
            .map(|action| action.label())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fixtures::seed_applications;

    #[test]
    fn tenant_cards_hide_financials_and_priority() {
        let application = &seed_applications()[0];
        let card = card_view(application, RoleView::Tenant);
        assert!(card.income_display.is_none());
        assert!(card.credit_score.is_none());
        assert!(card.priority_label.is_none());
        assert!(card.applicant_email.is_none());
        assert_eq!(card.actions, vec!["cancel", "contact"]);
    }

    #[test]
    fn owner_contact_details_unlock_on_acceptance() {
        let mut application = seed_applications()[0].clone();
        application.status = ApplicationStatus::Pending;
        let pending_card = card_view(&application, RoleView::Owner);
        assert!(pending_card.applicant_email.is_none());
        assert!(pending_card.income_display.is_some());

        application.status = ApplicationStatus::Accepted;
        let accepted_card = card_view(&application, RoleView::Owner);
        assert_eq!(
            accepted_card.applicant_email.as_deref(),
            Some(application.applicant.email.as_str())
        );
    }

    #[test]
    fn agency_sees_every_field() {
        let application = &seed_applications()[0];
        let card = card_view(application, RoleView::Agency);
        assert!(card.applicant_email.is_some());
        assert!(card.applicant_phone.is_some());
        assert!(card.income_display.is_some());
        assert!(card.priority_label.is_some());
        assert!(card.actions.contains(&"export_csv"));
    }

    #[test]
    fn role_labels_parse_back() {
        for role in RoleView::ordered() {
            assert_eq!(role.label().parse::<RoleView>().unwrap(), role);
        }
        assert!("admin".parse::<RoleView>().is_err());
    }
}
