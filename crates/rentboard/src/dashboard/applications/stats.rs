use serde::Serialize;

use super::domain::{Application, ApplicationStatus, DocumentsStatus};

/// Per-status tally entry for the summary cards.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub count: usize,
}

/// Per-documents-status tally entry.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentsCount {
    pub documents_status: DocumentsStatus,
    pub documents_status_label: &'static str,
    pub count: usize,
}

/// Flat aggregate consumed by the summary-card display. Recomputed from the
/// full record set on every request; nothing here is incremental.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStats {
    pub total: usize,
    pub by_status: Vec<StatusCount>,
    pub by_documents_status: Vec<DocumentsCount>,
    pub rent_total: u64,
    pub rent_mean: f64,
    /// Accepted share of all applications, in percent, one decimal place.
    pub conversion_rate_pct: f64,
}

impl ApplicationStats {
    pub fn status_count(&self, status: ApplicationStatus) -> usize {
        self.by_status
            .iter()
            .find(|entry| entry.status == status)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

pub fn application_stats(records: &[Application]) -> ApplicationStats {
    let total = records.len();

    let by_status = ApplicationStatus::ordered()
        .into_iter()
        .map(|status| StatusCount {
            status,
            status_label: status.label(),
            count: records
                .iter()
                .filter(|application| application.status == status)
                .count(),
        })
        .collect();

    let by_documents_status = DocumentsStatus::ordered()
        .into_iter()
        .map(|documents_status| DocumentsCount {
            documents_status,
            documents_status_label: documents_status.label(),
            count: records
                .iter()
                .filter(|application| application.documents_status == documents_status)
                .count(),
        })
        .collect();

    let rent_total: u64 = records
        .iter()
        .map(|application| u64::from(application.property.monthly_rent))
        .sum();

    let rent_mean = if total == 0 {
        0.0
    } else {
        rent_total as f64 / total as f64
    };

    let accepted = records
        .iter()
        .filter(|application| application.status == ApplicationStatus::Accepted)
        .count();
    let conversion_rate_pct = if total == 0 {
        0.0
    } else {
        (accepted as f64 / total as f64 * 1000.0).round() / 10.0
    };

    ApplicationStats {
        total,
        by_status,
        by_documents_status,
        rent_total,
        rent_mean,
        conversion_rate_pct,
    }
}
