use super::common::*;
use crate::dashboard::applications::domain::{ApplicantId, ApplicationStatus};
use crate::dashboard::applications::repository::RoleScope;
use crate::dashboard::applications::{DashboardError, FilterRequest};
use crate::dashboard::fixtures::seed_applications;
use crate::dashboard::roles::RoleView;

#[test]
fn tenant_scope_returns_only_own_records() {
    let (service, _, _) = build_service();
    let scope = RoleScope::Tenant {
        applicant_id: ApplicantId("apl-01".to_string()),
    };

    let outcome = service
        .query(RoleView::Tenant, &scope, FilterRequest::default())
        .expect("query succeeds");

    assert_eq!(outcome.total, 2);
    assert_eq!(outcome.matched, 2);
    assert!(outcome
        .cards
        .iter()
        .all(|card| card.applicant_name == "Maria Delgado"));
}

#[test]
fn owner_scope_covers_the_owners_properties() {
    let (service, _, _) = build_service();
    let scope = RoleScope::Owner {
        owner_id: "own-100".to_string(),
    };

    let outcome = service
        .query(RoleView::Owner, &scope, FilterRequest::default())
        .expect("query succeeds");

    let expected = seed_applications()
        .iter()
        .filter(|application| application.owner_id == "own-100")
        .count();
    assert_eq!(outcome.matched, expected);
}

#[test]
fn default_filter_is_identity_over_the_scope() {
    let (service, _, _) = build_service();
    let outcome = service
        .query(RoleView::Agency, &RoleScope::All, FilterRequest::default())
        .expect("query succeeds");

    let seeded = seed_applications();
    assert_eq!(outcome.total, seeded.len());
    assert_eq!(outcome.matched, seeded.len());
}

#[test]
fn status_filter_narrows_and_reports_scope_total() {
    let (service, _, _) = build_service();
    let mut request = FilterRequest::default();
    request.status = Some(ApplicationStatus::Pending);

    let outcome = service
        .query(RoleView::Agency, &RoleScope::All, request)
        .expect("query succeeds");

    let seeded = seed_applications();
    assert_eq!(outcome.total, seeded.len());
    assert!(outcome.matched < outcome.total);
    assert!(outcome
        .cards
        .iter()
        .all(|card| card.status == ApplicationStatus::Pending));
}

#[test]
fn malformed_bound_surfaces_as_criteria_error() {
    let (service, _, _) = build_service();
    let mut request = FilterRequest::default();
    request.credit_min = Some("seven hundred".to_string());

    match service.query(RoleView::Agency, &RoleScope::All, request) {
        Err(DashboardError::Criteria(_)) => {}
        other => panic!("expected criteria error, got {other:?}"),
    }
}

#[test]
fn stats_respect_the_scope() {
    let (service, _, _) = build_service();
    let all = service.stats(&RoleScope::All).expect("stats over all");
    let agency = service
        .stats(&RoleScope::Agency {
            agency_id: "agy-02".to_string(),
        })
        .expect("stats over agency");

    assert_eq!(all.total, seed_applications().len());
    assert_eq!(
        agency.total,
        seed_applications()
            .iter()
            .filter(|application| application.agency_id == "agy-02")
            .count()
    );
    assert!(agency.total < all.total);
}
