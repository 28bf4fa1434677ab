use chrono::NaiveDate;
use serde::Deserialize;

use super::super::domain::{
    Application, ApplicationStatus, DocumentsStatus, Priority, PropertyType,
};
use super::sort::{SortDirection, SortKey};

/// Errors raised while validating raw filter input.
#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
    #[error("filter bound '{field}' is not a number: '{value}'")]
    InvalidBound { field: &'static str, value: String },
    #[error("filter range '{field}' has a minimum greater than its maximum")]
    EmptyRange { field: &'static str },
}

/// Tri-state filter for the property-visited flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitedFilter {
    #[default]
    Any,
    Visited,
    NotVisited,
}

impl VisitedFilter {
    fn matches(self, visited: bool) -> bool {
        match self {
            VisitedFilter::Any => true,
            VisitedFilter::Visited => visited,
            VisitedFilter::NotVisited => !visited,
        }
    }
}

/// Raw filter form as submitted by the dashboard. Numeric bounds arrive as
/// strings because the UI posts free-form text inputs; `parse` converts them
/// exactly once into [`FilterCriteria`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub documents_status: Option<DocumentsStatus>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub rent_min: Option<String>,
    #[serde(default)]
    pub rent_max: Option<String>,
    #[serde(default)]
    pub credit_min: Option<String>,
    #[serde(default)]
    pub credit_max: Option<String>,
    #[serde(default)]
    pub visited: VisitedFilter,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub sort_dir: SortDirection,
}

impl FilterRequest {
    /// Validate the raw form. Malformed numeric bounds and inverted ranges are
    /// rejected here so the evaluation below never sees unchecked coercions.
    pub fn parse(self) -> Result<FilterCriteria, CriteriaError> {
        let rent_min = parse_bound("rent_min", self.rent_min)?;
        let rent_max = parse_bound("rent_max", self.rent_max)?;
        if let (Some(min), Some(max)) = (rent_min, rent_max) {
            if min > max {
                return Err(CriteriaError::EmptyRange { field: "rent" });
            }
        }

        let credit_min = parse_bound("credit_min", self.credit_min)?;
        let credit_max = parse_bound("credit_max", self.credit_max)?;
        if let (Some(min), Some(max)) = (credit_min, credit_max) {
            if min > max {
                return Err(CriteriaError::EmptyRange { field: "credit" });
            }
        }

        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            if from > to {
                return Err(CriteriaError::EmptyRange { field: "date" });
            }
        }

        let search = self
            .search
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty());

        Ok(FilterCriteria {
            search,
            status: self.status,
            documents_status: self.documents_status,
            priority: self.priority,
            property_type: self.property_type,
            property_id: self.property_id.filter(|id| !id.trim().is_empty()),
            date_from: self.date_from,
            date_to: self.date_to,
            rent_min,
            rent_max,
            credit_min,
            credit_max,
            visited: self.visited,
            sort_key: self.sort_key,
            sort_dir: self.sort_dir,
        })
    }
}

fn parse_bound(field: &'static str, raw: Option<String>) -> Result<Option<u32>, CriteriaError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| CriteriaError::InvalidBound {
            field,
            value: trimmed.to_string(),
        })
}

/// Validated filter criteria. A record passes only if every populated
/// criterion matches; the default value matches every record.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub documents_status: Option<DocumentsStatus>,
    pub priority: Option<Priority>,
    pub property_type: Option<PropertyType>,
    pub property_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub rent_min: Option<u32>,
    pub rent_max: Option<u32>,
    pub credit_min: Option<u32>,
    pub credit_max: Option<u32>,
    pub visited: VisitedFilter,
    pub sort_key: SortKey,
    pub sort_dir: SortDirection,
}

impl FilterCriteria {
    pub fn matches(&self, application: &Application) -> bool {
        if let Some(term) = &self.search {
            if !search_matches(application, term) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if application.status != status {
                return false;
            }
        }

        if let Some(documents_status) = self.documents_status {
            if application.documents_status != documents_status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if application.priority != priority {
                return false;
            }
        }

        if let Some(property_type) = self.property_type {
            if application.property.property_type != property_type {
                return false;
            }
        }

        if let Some(property_id) = &self.property_id {
            if application.property.property_id.0 != *property_id {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if application.submitted_on < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if application.submitted_on > to {
                return false;
            }
        }

        let rent = application.property.monthly_rent;
        if self.rent_min.is_some_and(|min| rent < min) {
            return false;
        }
        if self.rent_max.is_some_and(|max| rent > max) {
            return false;
        }

        // Missing credit scores fall back to zero so score bounds stay total.
        let credit = u32::from(application.applicant.credit_score.unwrap_or(0));
        if self.credit_min.is_some_and(|min| credit < min) {
            return false;
        }
        if self.credit_max.is_some_and(|max| credit > max) {
            return false;
        }

        self.visited.matches(application.visited)
    }

    /// Keep matching records, preserving their original relative order.
    pub fn filter(&self, records: Vec<Application>) -> Vec<Application> {
        records
            .into_iter()
            .filter(|application| self.matches(application))
            .collect()
    }
}

fn search_matches(application: &Application, lowered_term: &str) -> bool {
    [
        application.applicant.full_name.as_str(),
        application.property.title.as_str(),
        application.property.address.as_str(),
        application.agent_name.as_str(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(lowered_term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fixtures::seed_applications;

    fn request() -> FilterRequest {
        FilterRequest::default()
    }

    #[test]
    fn default_request_parses_to_identity_criteria() {
        let records = seed_applications();
        let criteria = request().parse().expect("default parses");
        let filtered = criteria.filter(records.clone());
        assert_eq!(filtered, records);
    }

    #[test]
    fn filtered_result_is_a_subset() {
        let records = seed_applications();
        let mut req = request();
        req.status = Some(ApplicationStatus::Pending);
        req.visited = VisitedFilter::Visited;
        let filtered = req.parse().expect("parses").filter(records.clone());

        assert!(filtered.len() <= records.len());
        for application in &filtered {
            assert!(records.contains(application));
            assert_eq!(application.status, ApplicationStatus::Pending);
            assert!(application.visited);
        }
    }

    #[test]
    fn search_is_case_insensitive_over_name_title_address_agent() {
        let records = seed_applications();
        let needle = records[0].applicant.full_name.to_uppercase();
        let mut req = request();
        req.search = Some(needle);
        let filtered = req.parse().expect("parses").filter(records.clone());

        assert!(!filtered.is_empty());
        let lowered = records[0].applicant.full_name.to_lowercase();
        for application in &filtered {
            assert!(application.applicant.full_name.to_lowercase().contains(&lowered));
        }
        let expected: Vec<_> = records
            .iter()
            .filter(|application| application.applicant.full_name.to_lowercase().contains(&lowered))
            .cloned()
            .collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn blank_search_and_blank_bounds_are_ignored() {
        let records = seed_applications();
        let mut req = request();
        req.search = Some("   ".to_string());
        req.rent_min = Some(String::new());
        req.credit_max = Some("  ".to_string());
        let filtered = req.parse().expect("parses").filter(records.clone());
        assert_eq!(filtered, records);
    }

    #[test]
    fn non_numeric_bound_is_rejected() {
        let mut req = request();
        req.rent_min = Some("cheap".to_string());
        match req.parse() {
            Err(CriteriaError::InvalidBound { field, value }) => {
                assert_eq!(field, "rent_min");
                assert_eq!(value, "cheap");
            }
            other => panic!("expected invalid bound, got {other:?}"),
        }
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let mut req = request();
        req.rent_min = Some("2000".to_string());
        req.rent_max = Some("1000".to_string());
        assert!(matches!(
            req.parse(),
            Err(CriteriaError::EmptyRange { field: "rent" })
        ));

        let mut req = request();
        req.date_from = NaiveDate::from_ymd_opt(2026, 3, 1);
        req.date_to = NaiveDate::from_ymd_opt(2026, 2, 1);
        assert!(matches!(
            req.parse(),
            Err(CriteriaError::EmptyRange { field: "date" })
        ));
    }

    #[test]
    fn rent_bounds_are_inclusive() {
        let records = seed_applications();
        let target = records[0].property.monthly_rent;
        let mut req = request();
        req.rent_min = Some(target.to_string());
        req.rent_max = Some(target.to_string());
        let filtered = req.parse().expect("parses").filter(records);
        assert!(filtered
            .iter()
            .all(|application| application.property.monthly_rent == target));
        assert!(!filtered.is_empty());
    }
}
