use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::super::roles::RoleView;
use super::commands::{CommandError, DashboardError, DashboardService};
use super::domain::{ApplicationId, Priority};
use super::query::FilterRequest;
use super::repository::{ApplicationRepository, ContactChannel, RepositoryError, RoleScope};

/// Query payload: optional scope narrowing plus the raw filter form.
#[derive(Debug, Deserialize)]
pub struct DashboardQueryRequest {
    #[serde(default)]
    pub applicant_id: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub agency_id: Option<String>,
    #[serde(flatten)]
    pub filter: FilterRequest,
}

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub role: RoleView,
}

#[derive(Debug, Deserialize)]
pub struct PriorityRequest {
    pub role: RoleView,
    pub priority: Priority,
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub role: RoleView,
    pub body: String,
}

/// Router builder exposing the dashboard query/stats surface and the
/// id-addressed command endpoints.
pub fn dashboard_router<R, C>(service: Arc<DashboardService<R, C>>) -> Router
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    Router::new()
        .route(
            "/api/v1/dashboard/:role/query",
            post(query_handler::<R, C>),
        )
        .route(
            "/api/v1/dashboard/:role/stats",
            get(stats_handler::<R, C>),
        )
        .route(
            "/api/v1/dashboard/:role/stats/:scope_id",
            get(scoped_stats_handler::<R, C>),
        )
        .route(
            "/api/v1/dashboard/:role/export",
            post(export_handler::<R, C>),
        )
        .route(
            "/api/v1/applications/:application_id/accept",
            post(accept_handler::<R, C>),
        )
        .route(
            "/api/v1/applications/:application_id/reject",
            post(reject_handler::<R, C>),
        )
        .route(
            "/api/v1/applications/:application_id/cancel",
            post(cancel_handler::<R, C>),
        )
        .route(
            "/api/v1/applications/:application_id/priority",
            post(priority_handler::<R, C>),
        )
        .route(
            "/api/v1/applications/:application_id/contact",
            post(contact_handler::<R, C>),
        )
        .with_state(service)
}

fn parse_role(raw: &str) -> Result<RoleView, Response> {
    raw.parse::<RoleView>().map_err(|err| {
        let payload = json!({ "error": err.to_string() });
        (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
    })
}

fn error_response(error: DashboardError) -> Response {
    let status = match &error {
        DashboardError::Criteria(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DashboardError::Command(CommandError::NotPermitted { .. }) => StatusCode::FORBIDDEN,
        DashboardError::Command(CommandError::InvalidTransition { .. }) => StatusCode::CONFLICT,
        DashboardError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        DashboardError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn query_handler<R, C>(
    State(service): State<Arc<DashboardService<R, C>>>,
    Path(role): Path<String>,
    axum::Json(request): axum::Json<DashboardQueryRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };
    let scope = RoleScope::for_role(
        role,
        request.applicant_id,
        request.owner_id,
        request.agency_id,
    );

    match service.query(role, &scope, request.filter) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stats_handler<R, C>(
    State(service): State<Arc<DashboardService<R, C>>>,
    Path(role): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    stats_response(service, &role, None)
}

pub(crate) async fn scoped_stats_handler<R, C>(
    State(service): State<Arc<DashboardService<R, C>>>,
    Path((role, scope_id)): Path<(String, String)>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    stats_response(service, &role, Some(scope_id))
}

fn stats_response<R, C>(
    service: Arc<DashboardService<R, C>>,
    raw_role: &str,
    scope_id: Option<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    let role = match parse_role(raw_role) {
        Ok(role) => role,
        Err(response) => return response,
    };
    let scope = match scope_id {
        Some(id) => match role {
            RoleView::Tenant => RoleScope::for_role(role, Some(id), None, None),
            RoleView::Owner => RoleScope::for_role(role, None, Some(id), None),
            RoleView::Agency => RoleScope::for_role(role, None, None, Some(id)),
        },
        None => RoleScope::All,
    };

    match service.stats(&scope) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<R, C>(
    State(service): State<Arc<DashboardService<R, C>>>,
    Path(role): Path<String>,
    axum::Json(request): axum::Json<DashboardQueryRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };
    let scope = RoleScope::for_role(
        role,
        request.applicant_id,
        request.owner_id,
        request.agency_id,
    );

    match service.export_csv(role, &scope, request.filter) {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv")],
            csv,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn accept_handler<R, C>(
    State(service): State<Arc<DashboardService<R, C>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<CommandRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    let id = ApplicationId(application_id);
    let today = Local::now().date_naive();
    match service.accept(request.role, &id, today) {
        Ok(application) => card_response(&application, request.role),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reject_handler<R, C>(
    State(service): State<Arc<DashboardService<R, C>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<CommandRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    let id = ApplicationId(application_id);
    let today = Local::now().date_naive();
    match service.reject(request.role, &id, today) {
        Ok(application) => card_response(&application, request.role),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn cancel_handler<R, C>(
    State(service): State<Arc<DashboardService<R, C>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<CommandRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    let id = ApplicationId(application_id);
    let today = Local::now().date_naive();
    match service.cancel(request.role, &id, today) {
        Ok(application) => card_response(&application, request.role),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn priority_handler<R, C>(
    State(service): State<Arc<DashboardService<R, C>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<PriorityRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    let id = ApplicationId(application_id);
    let today = Local::now().date_naive();
    match service.set_priority(request.role, &id, request.priority, today) {
        Ok(application) => card_response(&application, request.role),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn contact_handler<R, C>(
    State(service): State<Arc<DashboardService<R, C>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<ContactRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
    C: ContactChannel + 'static,
{
    let id = ApplicationId(application_id);
    match service.contact(request.role, &id, request.body) {
        Ok(message) => {
            let payload = json!({
                "status": "queued",
                "application_id": message.application_id.0,
                "recipient": message.recipient,
            });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn card_response(application: &super::domain::Application, role: RoleView) -> Response {
    let view = super::super::roles::card_view(application, role);
    (StatusCode::OK, axum::Json(view)).into_response()
}
