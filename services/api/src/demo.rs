use crate::infra::{InMemoryApplicationRepository, InMemoryContactChannel};
use chrono::Local;
use clap::Args;
use rentboard::dashboard::applications::{
    ApplicationId, ApplicationStats, ApplicationStatus, DashboardService, FilterRequest,
    PropertyType, QueryOutcome, RoleScope, SortDirection, SortKey,
};
use rentboard::dashboard::format::format_currency;
use rentboard::dashboard::roles::RoleView;
use rentboard::error::AppError;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Role view to render: tenant, owner, or agency
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: RoleView,
    /// Narrow the view to one applicant/owner/agency id, depending on role
    #[arg(long)]
    pub(crate) scope_id: Option<String>,
    /// Only show applications with this status
    #[arg(long, value_parser = parse_status)]
    pub(crate) status: Option<ApplicationStatus>,
    /// Free-text search over applicant, property, and agent names
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only show applications for this property type
    #[arg(long, value_parser = parse_property_type)]
    pub(crate) property_type: Option<PropertyType>,
    /// Lower rent bound (inclusive)
    #[arg(long)]
    pub(crate) rent_min: Option<String>,
    /// Upper rent bound (inclusive)
    #[arg(long)]
    pub(crate) rent_max: Option<String>,
    /// Sort column (submitted_date, updated_date, property_title, rent,
    /// applicant_name, credit_score, income, priority)
    #[arg(long, value_parser = parse_sort_key)]
    pub(crate) sort_key: Option<SortKey>,
    /// Sort direction (asc or desc)
    #[arg(long, value_parser = parse_sort_dir)]
    pub(crate) sort_dir: Option<SortDirection>,
    /// Include the full card list in the output
    #[arg(long)]
    pub(crate) list_cards: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Role view rendered in the dashboard portion (defaults to agency)
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: Option<RoleView>,
    /// Pause briefly before rendering, mimicking a dashboard load spinner
    #[arg(long)]
    pub(crate) simulate_loading: bool,
    /// Skip the accept/reject/cancel command walkthrough
    #[arg(long)]
    pub(crate) skip_commands: bool,
}

fn parse_role(raw: &str) -> Result<RoleView, String> {
    raw.parse::<RoleView>().map_err(|err| err.to_string())
}

fn parse_status(raw: &str) -> Result<ApplicationStatus, String> {
    raw.parse::<ApplicationStatus>()
        .map_err(|err| err.to_string())
}

fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    raw.parse::<PropertyType>().map_err(|err| err.to_string())
}

fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    raw.parse::<SortKey>().map_err(|err| err.to_string())
}

fn parse_sort_dir(raw: &str) -> Result<SortDirection, String> {
    raw.parse::<SortDirection>().map_err(|err| err.to_string())
}

type SeededService = DashboardService<InMemoryApplicationRepository, InMemoryContactChannel>;

fn build_seeded_service() -> (Arc<SeededService>, Arc<InMemoryContactChannel>) {
    let repository = Arc::new(InMemoryApplicationRepository::seeded());
    let contacts = Arc::new(InMemoryContactChannel::default());
    let service = Arc::new(DashboardService::new(repository, contacts.clone()));
    (service, contacts)
}

fn scope_for(role: RoleView, scope_id: Option<String>) -> RoleScope {
    match role {
        RoleView::Tenant => RoleScope::for_role(role, scope_id, None, None),
        RoleView::Owner => RoleScope::for_role(role, None, scope_id, None),
        RoleView::Agency => RoleScope::for_role(role, None, None, scope_id),
    }
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        role,
        scope_id,
        status,
        search,
        property_type,
        rent_min,
        rent_max,
        sort_key,
        sort_dir,
        list_cards,
    } = args;

    let (service, _) = build_seeded_service();
    let scope = scope_for(role, scope_id);

    let mut request = FilterRequest::default();
    request.status = status;
    request.search = search;
    request.property_type = property_type;
    request.rent_min = rent_min;
    request.rent_max = rent_max;
    if let Some(key) = sort_key {
        request.sort_key = key;
    }
    if let Some(dir) = sort_dir {
        request.sort_dir = dir;
    }

    let stats = service.stats(&scope).map_err(AppError::from)?;
    let outcome = service
        .query(role, &scope, request)
        .map_err(AppError::from)?;

    render_dashboard(role, &stats, &outcome, list_cards);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        role,
        simulate_loading,
        skip_commands,
    } = args;
    let role = role.unwrap_or(RoleView::Agency);
    let today = Local::now().date_naive();

    println!("Rental dashboard demo");
    if simulate_loading {
        println!("Loading dashboard data...");
        std::thread::sleep(Duration::from_millis(750));
        println!("Mock records loaded.");
    }

    let (service, contacts) = build_seeded_service();
    let scope = RoleScope::All;

    let stats = service.stats(&scope).map_err(AppError::from)?;
    let outcome = service
        .query(role, &scope, FilterRequest::default())
        .map_err(AppError::from)?;
    render_dashboard(role, &stats, &outcome, true);

    if skip_commands {
        return Ok(());
    }

    println!("\nCommand walkthrough");
    let pending = ApplicationId("app-1001".to_string());
    match service.accept(RoleView::Owner, &pending, today) {
        Ok(application) => println!(
            "- owner accepted {} -> status {}",
            application.application_id.0,
            application.status.label()
        ),
        Err(err) => println!("- owner accept failed: {err}"),
    }

    match service.accept(RoleView::Owner, &pending, today) {
        Ok(_) => println!("- second accept unexpectedly succeeded"),
        Err(err) => println!("- second accept refused: {err}"),
    }

    match service.accept(RoleView::Tenant, &pending, today) {
        Ok(_) => println!("- tenant accept unexpectedly succeeded"),
        Err(err) => println!("- tenant accept refused: {err}"),
    }

    let in_review = ApplicationId("app-1006".to_string());
    match service.reject(RoleView::Agency, &in_review, today) {
        Ok(application) => println!(
            "- agency rejected {} -> status {}",
            application.application_id.0,
            application.status.label()
        ),
        Err(err) => println!("- agency reject failed: {err}"),
    }

    let withdrawn = ApplicationId("app-1008".to_string());
    match service.cancel(RoleView::Tenant, &withdrawn, today) {
        Ok(application) => println!(
            "- tenant cancelled {} -> status {}",
            application.application_id.0,
            application.status.label()
        ),
        Err(err) => println!("- tenant cancel failed: {err}"),
    }

    match service.contact(
        RoleView::Tenant,
        &ApplicationId("app-1002".to_string()),
        "Could we schedule a second viewing?".to_string(),
    ) {
        Ok(message) => println!(
            "- tenant message queued for the {:?} of {}",
            message.recipient, message.application_id.0
        ),
        Err(err) => println!("- tenant contact failed: {err}"),
    }
    println!("- contact log holds {} message(s)", contacts.messages().len());

    let updated_stats = service.stats(&scope).map_err(AppError::from)?;
    println!(
        "\nConversion rate moved {:.1}% -> {:.1}%",
        stats.conversion_rate_pct, updated_stats.conversion_rate_pct
    );

    let export = service
        .export_csv(RoleView::Agency, &scope, FilterRequest::default())
        .map_err(AppError::from)?;
    println!("\nRoster export preview");
    for line in export.lines().take(3) {
        println!("  {line}");
    }
    let remaining = export.lines().count().saturating_sub(3);
    if remaining > 0 {
        println!("  ... {remaining} more line(s)");
    }

    Ok(())
}

fn render_dashboard(role: RoleView, stats: &ApplicationStats, outcome: &QueryOutcome, list_cards: bool) {
    println!("Dashboard view: {}", role.label());
    println!(
        "Records in scope: {} | matching filters: {}",
        outcome.total, outcome.matched
    );

    println!("\nStatus summary");
    for entry in &stats.by_status {
        println!("- {}: {}", entry.status_label, entry.count);
    }

    println!("\nDocuments");
    for entry in &stats.by_documents_status {
        println!("- {}: {}", entry.documents_status_label, entry.count);
    }

    println!(
        "\nRent portfolio: {} total | {} average",
        format_currency(stats.rent_total),
        format_currency(stats.rent_mean.round() as u64)
    );
    println!("Conversion rate: {:.1}%", stats.conversion_rate_pct);

    if list_cards {
        println!("\nApplications");
        for card in &outcome.cards {
            let mut line = format!(
                "- {} | {} | {} | {} | docs {} | submitted {} | {}",
                card.application_id,
                card.property_title,
                card.rent_display,
                card.status_label,
                card.documents_status_label,
                card.submitted_on,
                card.applicant_name
            );
            if let Some(income) = &card.income_display {
                line.push_str(&format!(" | income {income}"));
            }
            if let Some(score) = card.credit_score {
                line.push_str(&format!(" | credit {score}"));
            }
            if let Some(priority) = card.priority_label {
                line.push_str(&format!(" | priority {priority}"));
            }
            println!("{line}");
        }
    }
}
