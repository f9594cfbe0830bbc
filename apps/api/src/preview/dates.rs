use chrono::NaiveDate;

/// `"2024-01"` → `"January 2024"`. Empty input stays empty; anything that is
/// not a `YYYY-MM` month comes back unchanged.
pub fn format_month_year(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => value.to_string(),
    }
}
