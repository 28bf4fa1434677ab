use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier wrapper for rental applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identifier wrapper for advertised properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

/// Identifier wrapper for applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Raised when a label cannot be mapped back onto one of the workflow enums.
#[derive(Debug, thiserror::Error)]
#[error("unknown {field} value '{value}'")]
pub struct UnknownLabel {
    pub field: &'static str,
    pub value: String,
}

/// Kind of dwelling the application targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Duplex,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Studio => "studio",
            PropertyType::Duplex => "duplex",
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apartment" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            "studio" => Ok(Self::Studio),
            "duplex" => Ok(Self::Duplex),
            other => Err(UnknownLabel {
                field: "property_type",
                value: other.to_string(),
            }),
        }
    }
}

/// Workflow status tracked for every rental application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    InProgress,
    Accepted,
    Rejected,
    Cancelled,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::InProgress => "in_progress",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Cancelled => "cancelled",
        }
    }

    /// Accepted, rejected, and cancelled applications admit no further transitions.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected | ApplicationStatus::Cancelled
        )
    }

    pub fn ordered() -> [ApplicationStatus; 5] {
        [
            ApplicationStatus::Pending,
            ApplicationStatus::InProgress,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
            ApplicationStatus::Cancelled,
        ]
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "in-progress" => Ok(Self::InProgress),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownLabel {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Tri-state completeness marker for an application's supporting paperwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentsStatus {
    Incomplete,
    Complete,
    UnderReview,
}

impl DocumentsStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentsStatus::Incomplete => "incomplete",
            DocumentsStatus::Complete => "complete",
            DocumentsStatus::UnderReview => "under_review",
        }
    }

    pub fn ordered() -> [DocumentsStatus; 3] {
        [
            DocumentsStatus::Incomplete,
            DocumentsStatus::Complete,
            DocumentsStatus::UnderReview,
        ]
    }
}

impl FromStr for DocumentsStatus {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "incomplete" => Ok(Self::Incomplete),
            "complete" => Ok(Self::Complete),
            "under_review" | "under-review" => Ok(Self::UnderReview),
            other => Err(UnknownLabel {
                field: "documents_status",
                value: other.to_string(),
            }),
        }
    }
}

/// Handling priority assigned by the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }

    /// Ordinal used when sorting by priority: low=1, normal=2, high=3.
    pub const fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Normal => 2,
            Priority::High => 3,
        }
    }
}

impl FromStr for Priority {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            other => Err(UnknownLabel {
                field: "priority",
                value: other.to_string(),
            }),
        }
    }
}

/// Category of an attached supporting document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Identification,
    ProofOfIncome,
    Reference,
    Other,
}

impl DocumentKind {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Identification => "identification",
            DocumentKind::ProofOfIncome => "proof_of_income",
            DocumentKind::Reference => "reference",
            DocumentKind::Other => "other",
        }
    }
}

/// Descriptor of an uploaded supporting file. Only metadata is tracked here;
/// the bytes live wherever the storage URL points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFile {
    pub id: String,
    pub name: String,
    pub kind: DocumentKind,
    pub size_bytes: u64,
    pub url: String,
}

/// Property attributes surfaced on every dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub property_id: PropertyId,
    pub title: String,
    pub address: String,
    pub property_type: PropertyType,
    /// Listed monthly rent in whole currency units.
    pub monthly_rent: u32,
}

/// Applicant attributes carried by the application record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantSummary {
    pub applicant_id: ApplicantId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Declared gross monthly income in whole currency units.
    pub monthly_income: u32,
    pub credit_score: Option<u16>,
}

/// A candidate's request to rent a specific property, carrying applicant,
/// property, and workflow-status fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: ApplicationId,
    pub property: PropertySummary,
    pub applicant: ApplicantSummary,
    /// Listing agent handling the file.
    pub agent_name: String,
    /// Owner whose property the application targets; scopes the owner view.
    pub owner_id: String,
    /// Agency managing the listing; scopes the agency view.
    pub agency_id: String,
    pub status: ApplicationStatus,
    pub documents_status: DocumentsStatus,
    pub priority: Priority,
    pub documents: Vec<DocumentFile>,
    pub submitted_on: NaiveDate,
    pub updated_on: NaiveDate,
    /// Whether the applicant has visited the property.
    pub visited: bool,
}
