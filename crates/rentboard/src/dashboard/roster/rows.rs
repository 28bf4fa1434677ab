use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::applications::domain::{
    ApplicantId, ApplicantSummary, Application, ApplicationId, PropertyId, PropertySummary,
};

/// One CSV line of the interchange format. Enum-valued columns travel as their
/// labels so exports stay readable in a spreadsheet; attached document
/// descriptors are not part of the format.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RosterRow {
    #[serde(rename = "Application ID")]
    pub(crate) application_id: String,
    #[serde(rename = "Property ID")]
    pub(crate) property_id: String,
    #[serde(rename = "Property Title")]
    pub(crate) property_title: String,
    #[serde(rename = "Property Address")]
    pub(crate) property_address: String,
    #[serde(rename = "Property Type")]
    pub(crate) property_type: String,
    #[serde(rename = "Monthly Rent")]
    pub(crate) monthly_rent: u32,
    #[serde(rename = "Applicant ID")]
    pub(crate) applicant_id: String,
    #[serde(rename = "Applicant Name")]
    pub(crate) applicant_name: String,
    #[serde(rename = "Email")]
    pub(crate) email: String,
    #[serde(rename = "Phone")]
    pub(crate) phone: String,
    #[serde(rename = "Monthly Income")]
    pub(crate) monthly_income: u32,
    #[serde(rename = "Credit Score")]
    pub(crate) credit_score: Option<u16>,
    #[serde(rename = "Agent")]
    pub(crate) agent_name: String,
    #[serde(rename = "Owner ID")]
    pub(crate) owner_id: String,
    #[serde(rename = "Agency ID")]
    pub(crate) agency_id: String,
    #[serde(rename = "Status")]
    pub(crate) status: String,
    #[serde(rename = "Documents Status")]
    pub(crate) documents_status: String,
    #[serde(rename = "Priority")]
    pub(crate) priority: String,
    #[serde(rename = "Submitted On")]
    pub(crate) submitted_on: NaiveDate,
    #[serde(rename = "Updated On")]
    pub(crate) updated_on: NaiveDate,
    #[serde(rename = "Visited")]
    pub(crate) visited: bool,
}

impl RosterRow {
    pub(crate) fn from_application(application: &Application) -> Self {
        Self {
            application_id: application.application_id.0.clone(),
            property_id: application.property.property_id.0.clone(),
            property_title: application.property.title.clone(),
            property_address: application.property.address.clone(),
            property_type: application.property.property_type.label().to_string(),
            monthly_rent: application.property.monthly_rent,
            applicant_id: application.applicant.applicant_id.0.clone(),
            applicant_name: application.applicant.full_name.clone(),
            email: application.applicant.email.clone(),
            phone: application.applicant.phone.clone(),
            monthly_income: application.applicant.monthly_income,
            credit_score: application.applicant.credit_score,
            agent_name: application.agent_name.clone(),
            owner_id: application.owner_id.clone(),
            agency_id: application.agency_id.clone(),
            status: application.status.label().to_string(),
            documents_status: application.documents_status.label().to_string(),
            priority: application.priority.label().to_string(),
            submitted_on: application.submitted_on,
            updated_on: application.updated_on,
            visited: application.visited,
        }
    }

    /// Rebuild an application record from a row. Enum columns are validated;
    /// the message names the offending column for row-level error reporting.
    pub(crate) fn into_application(self) -> Result<Application, String> {
        let status = self.status.parse().map_err(stringify_label_error)?;
        let documents_status = self
            .documents_status
            .parse()
            .map_err(stringify_label_error)?;
        let priority = self.priority.parse().map_err(stringify_label_error)?;
        let property_type = self.property_type.parse().map_err(stringify_label_error)?;

        Ok(Application {
            application_id: ApplicationId(self.application_id),
            property: PropertySummary {
                property_id: PropertyId(self.property_id),
                title: self.property_title,
                address: self.property_address,
                property_type,
                monthly_rent: self.monthly_rent,
            },
            applicant: ApplicantSummary {
                applicant_id: ApplicantId(self.applicant_id),
                full_name: self.applicant_name,
                email: self.email,
                phone: self.phone,
                monthly_income: self.monthly_income,
                credit_score: self.credit_score,
            },
            agent_name: self.agent_name,
            owner_id: self.owner_id,
            agency_id: self.agency_id,
            status,
            documents_status,
            priority,
            documents: Vec::new(),
            submitted_on: self.submitted_on,
            updated_on: self.updated_on,
            visited: self.visited,
        })
    }
}

fn stringify_label_error(err: super::super::applications::domain::UnknownLabel) -> String {
    err.to_string()
}
