//! Deterministic seed records standing in for a real storage backend. The set
//! spans every status, both visited states, and multiple owners and agencies
//! so each role view has something to show.

use chrono::NaiveDate;

use super::applications::domain::{
    ApplicantId, ApplicantSummary, Application, ApplicationId, ApplicationStatus, DocumentFile,
    DocumentKind, DocumentsStatus, Priority, PropertyId, PropertySummary, PropertyType,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date in range")
}

struct Seed {
    id: &'static str,
    property_id: &'static str,
    title: &'static str,
    address: &'static str,
    property_type: PropertyType,
    rent: u32,
    applicant_id: &'static str,
    applicant: &'static str,
    email: &'static str,
    phone: &'static str,
    income: u32,
    credit: Option<u16>,
    agent: &'static str,
    owner: &'static str,
    agency: &'static str,
    status: ApplicationStatus,
    documents_status: DocumentsStatus,
    priority: Priority,
    submitted: NaiveDate,
    updated: NaiveDate,
    visited: bool,
    documents: Vec<DocumentFile>,
}

fn build(seed: Seed) -> Application {
    Application {
        application_id: ApplicationId(seed.id.to_string()),
        property: PropertySummary {
            property_id: PropertyId(seed.property_id.to_string()),
            title: seed.title.to_string(),
            address: seed.address.to_string(),
            property_type: seed.property_type,
            monthly_rent: seed.rent,
        },
        applicant: ApplicantSummary {
            applicant_id: ApplicantId(seed.applicant_id.to_string()),
            full_name: seed.applicant.to_string(),
            email: seed.email.to_string(),
            phone: seed.phone.to_string(),
            monthly_income: seed.income,
            credit_score: seed.credit,
        },
        agent_name: seed.agent.to_string(),
        owner_id: seed.owner.to_string(),
        agency_id: seed.agency.to_string(),
        status: seed.status,
        documents_status: seed.documents_status,
        priority: seed.priority,
        documents: seed.documents,
        submitted_on: seed.submitted,
        updated_on: seed.updated,
        visited: seed.visited,
    }
}

fn income_proof(application_id: &str) -> DocumentFile {
    DocumentFile {
        id: format!("{application_id}-doc-1"),
        name: "Payslip bundle.pdf".to_string(),
        kind: DocumentKind::ProofOfIncome,
        size_bytes: 284_113,
        url: format!("https://files.rentboard.test/{application_id}/payslips.pdf"),
    }
}

fn identity_card(application_id: &str) -> DocumentFile {
    DocumentFile {
        id: format!("{application_id}-doc-2"),
        name: "National ID.jpg".to_string(),
        kind: DocumentKind::Identification,
        size_bytes: 1_048_002,
        url: format!("https://files.rentboard.test/{application_id}/id.jpg"),
    }
}

/// The full demo record set, in submission order.
pub fn seed_applications() -> Vec<Application> {
    vec![
        build(Seed {
            id: "app-1001",
            property_id: "prop-201",
            title: "Sunrise Lofts 3B",
            address: "14 Canal Street",
            property_type: PropertyType::Apartment,
            rent: 1180,
            applicant_id: "apl-01",
            applicant: "Maria Delgado",
            email: "maria.delgado@example.net",
            phone: "+1-555-0161",
            income: 4200,
            credit: Some(712),
            agent: "Jon Weber",
            owner: "own-100",
            agency: "agy-01",
            status: ApplicationStatus::Pending,
            documents_status: DocumentsStatus::Complete,
            priority: Priority::High,
            submitted: date(2026, 6, 2),
            updated: date(2026, 6, 5),
            visited: true,
            documents: vec![income_proof("app-1001"), identity_card("app-1001")],
        }),
        build(Seed {
            id: "app-1002",
            property_id: "prop-202",
            title: "Birchwood House",
            address: "88 Linden Avenue",
            property_type: PropertyType::House,
            rent: 2350,
            applicant_id: "apl-02",
            applicant: "Theo Lindqvist",
            email: "theo.lindqvist@example.net",
            phone: "+1-555-0118",
            income: 7600,
            credit: Some(784),
            agent: "Jon Weber",
            owner: "own-100",
            agency: "agy-01",
            status: ApplicationStatus::InProgress,
            documents_status: DocumentsStatus::UnderReview,
            priority: Priority::Normal,
            submitted: date(2026, 6, 9),
            updated: date(2026, 6, 20),
            visited: true,
            documents: vec![income_proof("app-1002")],
        }),
        build(Seed {
            id: "app-1003",
            property_id: "prop-203",
            title: "Harbor Studio 12",
            address: "3 Quay Walk",
            property_type: PropertyType::Studio,
            rent: 890,
            applicant_id: "apl-03",
            applicant: "Priya Nair",
            email: "priya.nair@example.net",
            phone: "+1-555-0132",
            income: 3100,
            credit: Some(655),
            agent: "Dana Okafor",
            owner: "own-200",
            agency: "agy-01",
            status: ApplicationStatus::Accepted,
            documents_status: DocumentsStatus::Complete,
            priority: Priority::Normal,
            submitted: date(2026, 5, 18),
            updated: date(2026, 6, 1),
            visited: true,
            documents: vec![income_proof("app-1003"), identity_card("app-1003")],
        }),
        build(Seed {
            id: "app-1004",
            property_id: "prop-201",
            title: "Sunrise Lofts 3B",
            address: "14 Canal Street",
            property_type: PropertyType::Apartment,
            rent: 1180,
            applicant_id: "apl-04",
            applicant: "Samuel Osei",
            email: "samuel.osei@example.net",
            phone: "+1-555-0175",
            income: 3900,
            credit: None,
            agent: "Jon Weber",
            owner: "own-100",
            agency: "agy-01",
            status: ApplicationStatus::Rejected,
            documents_status: DocumentsStatus::Incomplete,
            priority: Priority::Low,
            submitted: date(2026, 5, 30),
            updated: date(2026, 6, 12),
            visited: false,
            documents: Vec::new(),
        }),
        build(Seed {
            id: "app-1005",
            property_id: "prop-204",
            title: "Elm Street Duplex",
            address: "152 Elm Street",
            property_type: PropertyType::Duplex,
            rent: 1640,
            applicant_id: "apl-01",
            applicant: "Maria Delgado",
            email: "maria.delgado@example.net",
            phone: "+1-555-0161",
            income: 4200,
            credit: Some(712),
            agent: "Dana Okafor",
            owner: "own-200",
            agency: "agy-02",
            status: ApplicationStatus::Cancelled,
            documents_status: DocumentsStatus::Incomplete,
            priority: Priority::Low,
            submitted: date(2026, 4, 22),
            updated: date(2026, 5, 2),
            visited: false,
            documents: vec![identity_card("app-1005")],
        }),
        build(Seed {
            id: "app-1006",
            property_id: "prop-205",
            title: "Garden Court 7A",
            address: "7 Rosemary Close",
            property_type: PropertyType::Apartment,
            rent: 1425,
            applicant_id: "apl-05",
            applicant: "Lena Kovac",
            email: "lena.kovac@example.net",
            phone: "+1-555-0129",
            income: 5150,
            credit: Some(731),
            agent: "Dana Okafor",
            owner: "own-200",
            agency: "agy-02",
            status: ApplicationStatus::Pending,
            documents_status: DocumentsStatus::UnderReview,
            priority: Priority::Normal,
            submitted: date(2026, 6, 15),
            updated: date(2026, 6, 15),
            visited: false,
            documents: vec![income_proof("app-1006")],
        }),
        build(Seed {
            id: "app-1007",
            property_id: "prop-202",
            title: "Birchwood House",
            address: "88 Linden Avenue",
            property_type: PropertyType::House,
            rent: 2350,
            applicant_id: "apl-06",
            applicant: "Ava Martin",
            email: "ava.martin@example.net",
            phone: "+1-555-0190",
            income: 8800,
            credit: Some(802),
            agent: "Jon Weber",
            owner: "own-100",
            agency: "agy-01",
            status: ApplicationStatus::Accepted,
            documents_status: DocumentsStatus::Complete,
            priority: Priority::High,
            submitted: date(2026, 5, 6),
            updated: date(2026, 5, 28),
            visited: true,
            documents: vec![income_proof("app-1007"), identity_card("app-1007")],
        }),
        build(Seed {
            id: "app-1008",
            property_id: "prop-206",
            title: "Foundry Studio 4",
            address: "41 Ironworks Lane",
            property_type: PropertyType::Studio,
            rent: 960,
            applicant_id: "apl-07",
            applicant: "Noah Fischer",
            email: "noah.fischer@example.net",
            phone: "+1-555-0144",
            income: 2950,
            credit: Some(618),
            agent: "Dana Okafor",
            owner: "own-200",
            agency: "agy-02",
            status: ApplicationStatus::InProgress,
            documents_status: DocumentsStatus::Incomplete,
            priority: Priority::Normal,
            submitted: date(2026, 6, 21),
            updated: date(2026, 6, 27),
            visited: false,
            documents: Vec::new(),
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_every_status() {
        let records = seed_applications();
        for status in ApplicationStatus::ordered() {
            assert!(
                records.iter().any(|application| application.status == status),
                "missing status {status:?}"
            );
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let records = seed_applications();
        let mut ids: Vec<_> = records
            .iter()
            .map(|application| application.application_id.0.clone())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn seed_spans_owners_agencies_and_visit_states() {
        let records = seed_applications();
        assert!(records.iter().any(|application| application.owner_id == "own-100"));
        assert!(records.iter().any(|application| application.owner_id == "own-200"));
        assert!(records.iter().any(|application| application.agency_id == "agy-02"));
        assert!(records.iter().any(|application| application.visited));
        assert!(records.iter().any(|application| !application.visited));
    }
}
