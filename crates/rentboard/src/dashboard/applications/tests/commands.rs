use chrono::NaiveDate;

use super::common::*;
use crate::dashboard::applications::domain::{ApplicationId, ApplicationStatus, Priority};
use crate::dashboard::applications::repository::{
    ApplicationRepository, ContactRecipient, RepositoryError, RoleScope,
};
use crate::dashboard::applications::{CommandError, DashboardError, FilterRequest};
use crate::dashboard::roles::RoleView;

fn effective_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, 1).expect("valid date")
}

fn pending_id() -> ApplicationId {
    ApplicationId("app-1001".to_string())
}

#[test]
fn owner_accepts_a_pending_application() {
    let (service, repository, _) = build_service();
    let updated = service
        .accept(RoleView::Owner, &pending_id(), effective_date())
        .expect("accept succeeds");

    assert_eq!(updated.status, ApplicationStatus::Accepted);
    assert_eq!(updated.updated_on, effective_date());

    let stored = repository
        .fetch(&pending_id())
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.status, ApplicationStatus::Accepted);
}

#[test]
fn tenant_may_not_accept() {
    let (service, _, _) = build_service();
    match service.accept(RoleView::Tenant, &pending_id(), effective_date()) {
        Err(DashboardError::Command(CommandError::NotPermitted { role, action })) => {
            assert_eq!(role, "tenant");
            assert_eq!(action, "accept");
        }
        other => panic!("expected not-permitted error, got {other:?}"),
    }
}

#[test]
fn terminal_records_refuse_further_transitions() {
    let (service, _, _) = build_service();
    let cancelled = ApplicationId("app-1005".to_string());
    match service.reject(RoleView::Agency, &cancelled, effective_date()) {
        Err(DashboardError::Command(CommandError::InvalidTransition {
            application_id,
            status,
        })) => {
            assert_eq!(application_id, "app-1005");
            assert_eq!(status, "cancelled");
        }
        other => panic!("expected invalid transition, got {other:?}"),
    }
}

#[test]
fn tenant_cancels_an_in_progress_application() {
    let (service, _, _) = build_service();
    let id = ApplicationId("app-1002".to_string());
    let updated = service
        .cancel(RoleView::Tenant, &id, effective_date())
        .expect("cancel succeeds");
    assert_eq!(updated.status, ApplicationStatus::Cancelled);
}

#[test]
fn unknown_application_propagates_not_found() {
    let (service, _, _) = build_service();
    let id = ApplicationId("app-9999".to_string());
    match service.accept(RoleView::Owner, &id, effective_date()) {
        Err(DashboardError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn priority_updates_are_agency_only() {
    let (service, repository, _) = build_service();
    match service.set_priority(RoleView::Owner, &pending_id(), Priority::Low, effective_date()) {
        Err(DashboardError::Command(CommandError::NotPermitted { .. })) => {}
        other => panic!("expected not-permitted error, got {other:?}"),
    }

    service
        .set_priority(RoleView::Agency, &pending_id(), Priority::Low, effective_date())
        .expect("agency may set priority");
    let stored = repository
        .fetch(&pending_id())
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.priority, Priority::Low);
}

#[test]
fn contact_routes_by_role() {
    let (service, _, contacts) = build_service();
    service
        .contact(RoleView::Tenant, &pending_id(), "When can I move in?".to_string())
        .expect("tenant contact succeeds");
    service
        .contact(RoleView::Owner, &pending_id(), "Reference check done.".to_string())
        .expect("owner contact succeeds");

    let messages = contacts.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].recipient, ContactRecipient::Agent);
    assert_eq!(messages[1].recipient, ContactRecipient::Applicant);
}

#[test]
fn export_is_reserved_for_the_agency() {
    let (service, _, _) = build_service();
    match service.export_csv(RoleView::Owner, &RoleScope::All, FilterRequest::default()) {
        Err(DashboardError::Command(CommandError::NotPermitted { action, .. })) => {
            assert_eq!(action, "export_csv");
        }
        other => panic!("expected not-permitted error, got {other:?}"),
    }

    let csv = service
        .export_csv(RoleView::Agency, &RoleScope::All, FilterRequest::default())
        .expect("agency export succeeds");
    assert!(csv.starts_with("Application ID,"));
    assert!(csv.contains("app-1001"));
}

#[test]
fn export_applies_the_filter_before_serializing() {
    let (service, _, _) = build_service();
    let mut request = FilterRequest::default();
    request.status = Some(ApplicationStatus::Accepted);

    let csv = service
        .export_csv(RoleView::Agency, &RoleScope::All, request)
        .expect("filtered export succeeds");
    assert!(csv.contains("app-1003"));
    assert!(!csv.contains("app-1001"));
}
