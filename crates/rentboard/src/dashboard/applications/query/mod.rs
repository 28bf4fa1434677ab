//! Shared query evaluation for every role view: validated filter criteria
//! applied as a single predicate pass, followed by a stable comparator sort.

mod criteria;
mod sort;

pub use criteria::{CriteriaError, FilterCriteria, FilterRequest, VisitedFilter};
pub use sort::{sort_applications, SortDirection, SortKey};

use super::domain::Application;

/// Filter then sort in one pass, per the criteria's embedded sort settings.
pub fn evaluate(records: Vec<Application>, criteria: &FilterCriteria) -> Vec<Application> {
    let mut matched = criteria.filter(records);
    sort_applications(&mut matched, criteria.sort_key, criteria.sort_dir);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fixtures::seed_applications;

    #[test]
    fn evaluate_filters_before_sorting() {
        let records = seed_applications();
        let mut request = FilterRequest::default();
        request.rent_max = Some("1500".to_string());
        request.sort_key = SortKey::Rent;
        request.sort_dir = SortDirection::Ascending;
        let criteria = request.parse().expect("criteria parse");

        let result = evaluate(records, &criteria);
        assert!(!result.is_empty());
        for pair in result.windows(2) {
            assert!(pair[0].property.monthly_rent <= pair[1].property.monthly_rent);
        }
        assert!(result
            .iter()
            .all(|application| application.property.monthly_rent <= 1500));
    }
}
