use chrono::{DateTime, Datelike, NaiveDate};

use crate::i18n::Locale;

const BUDDHIST_ERA_OFFSET: i32 = 543;

pub fn format_year(year: i32, locale: Locale) -> String {
    match locale {
        Locale::Th => (year + BUDDHIST_ERA_OFFSET).to_string(),
        Locale::En => year.to_string(),
    }
}

/// Reformats a record date for display. Text that does not parse as a date
/// is returned unchanged.
pub fn format_date(raw: &str, locale: Locale) -> String {
    let raw = raw.trim();
    let Some(date) = parse_date(raw) else {
        return raw.to_owned();
    };
    let year = format_year(date.year(), locale);
    match locale {
        Locale::En => format!("{} {}", date.format("%B %-d"), year),
        Locale::Th => format!("{} {}", date.format("%-d/%-m"), year),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%d", "%B %d %Y", "%B %d, %Y", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
