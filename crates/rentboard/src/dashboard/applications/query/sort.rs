use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::super::domain::{Application, UnknownLabel};

/// Columns the dashboard can order by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    SubmittedDate,
    UpdatedDate,
    PropertyTitle,
    Rent,
    ApplicantName,
    CreditScore,
    Income,
    Priority,
}

impl FromStr for SortKey {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "submitted_date" | "submitted" => Ok(Self::SubmittedDate),
            "updated_date" | "updated" => Ok(Self::UpdatedDate),
            "property_title" | "title" => Ok(Self::PropertyTitle),
            "rent" => Ok(Self::Rent),
            "applicant_name" | "name" => Ok(Self::ApplicantName),
            "credit_score" | "credit" => Ok(Self::CreditScore),
            "income" => Ok(Self::Income),
            "priority" => Ok(Self::Priority),
            other => Err(UnknownLabel {
                field: "sort_key",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl FromStr for SortDirection {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(UnknownLabel {
                field: "sort_dir",
                value: other.to_string(),
            }),
        }
    }
}

/// Order records in place. The underlying sort is stable, so records that
/// compare equal keep the order the filter produced and re-sorting with the
/// same key is a no-op.
pub fn sort_applications(records: &mut [Application], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &Application, b: &Application, key: SortKey) -> Ordering {
    match key {
        SortKey::SubmittedDate => a.submitted_on.cmp(&b.submitted_on),
        SortKey::UpdatedDate => a.updated_on.cmp(&b.updated_on),
        SortKey::PropertyTitle => compare_text(&a.property.title, &b.property.title),
        SortKey::Rent => a.property.monthly_rent.cmp(&b.property.monthly_rent),
        SortKey::ApplicantName => compare_text(&a.applicant.full_name, &b.applicant.full_name),
        SortKey::CreditScore => a
            .applicant
            .credit_score
            .unwrap_or(0)
            .cmp(&b.applicant.credit_score.unwrap_or(0)),
        SortKey::Income => a.applicant.monthly_income.cmp(&b.applicant.monthly_income),
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fixtures::seed_applications;

    #[test]
    fn rent_ascending_orders_cheapest_first() {
        let mut records = seed_applications();
        sort_applications(&mut records, SortKey::Rent, SortDirection::Ascending);
        for pair in records.windows(2) {
            assert!(pair[0].property.monthly_rent <= pair[1].property.monthly_rent);
        }
    }

    #[test]
    fn descending_reverses_the_ascending_order() {
        let mut ascending = seed_applications();
        sort_applications(&mut ascending, SortKey::Income, SortDirection::Ascending);
        let mut descending = seed_applications();
        sort_applications(&mut descending, SortKey::Income, SortDirection::Descending);

        let incomes_up: Vec<_> = ascending
            .iter()
            .map(|application| application.applicant.monthly_income)
            .collect();
        let mut incomes_down: Vec<_> = descending
            .iter()
            .map(|application| application.applicant.monthly_income)
            .collect();
        incomes_down.reverse();
        assert_eq!(incomes_up, incomes_down);
    }

    #[test]
    fn title_ordering_ignores_case() {
        let mut records = seed_applications();
        records[0].property.title = "zephyr flats".to_string();
        records[1].property.title = "ZEPHYR ANNEX".to_string();
        sort_applications(&mut records, SortKey::PropertyTitle, SortDirection::Ascending);
        let titles: Vec<_> = records
            .iter()
            .map(|application| application.property.title.to_lowercase())
            .collect();
        let mut expected = titles.clone();
        expected.sort();
        assert_eq!(titles, expected);
    }

    #[test]
    fn priority_uses_ordinal_ranking() {
        let mut records = seed_applications();
        sort_applications(&mut records, SortKey::Priority, SortDirection::Descending);
        for pair in records.windows(2) {
            assert!(pair[0].priority.rank() >= pair[1].priority.rank());
        }
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut once = seed_applications();
        sort_applications(&mut once, SortKey::ApplicantName, SortDirection::Ascending);
        let mut twice = once.clone();
        sort_applications(&mut twice, SortKey::ApplicantName, SortDirection::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_credit_scores_sort_lowest() {
        let mut records = seed_applications();
        records[0].applicant.credit_score = None;
        sort_applications(&mut records, SortKey::CreditScore, SortDirection::Ascending);
        assert!(records[0].applicant.credit_score.is_none());
    }
}
