//! Display conventions shared by the card views and the CLI renderer.

use chrono::NaiveDate;

/// Whole-unit currency display with thousands separators, e.g. `$1,180`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// ISO date display, the convention used uniformly across the dashboard.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(950), "$950");
        assert_eq!(format_currency(1180), "$1,180");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn dates_render_iso() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).expect("valid date");
        assert_eq!(format_date(date), "2026-03-07");
    }
}
