//! Human-facing interval labels

const MINUTES_PER_DAY: f64 = 1440.0;
const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Format a day-count as a short label for review buttons
///
/// Under a day renders as minutes, then whole days, weeks, months, and
/// years, each rounded to the nearest whole unit. Never renders below
/// one minute.
pub fn format_interval(days: f64) -> String {
    let days = days.max(0.0);

    if days < 1.0 {
        let minutes = (days * MINUTES_PER_DAY).round().max(1.0);
        format!("{}m", minutes as i64)
    } else if days < DAYS_PER_WEEK {
        format!("{}d", days.round() as i64)
    } else if days < DAYS_PER_MONTH {
        format!("{}w", (days / DAYS_PER_WEEK).round() as i64)
    } else if days < DAYS_PER_YEAR {
        format!("{}mo", (days / DAYS_PER_MONTH).round() as i64)
    } else {
        format!("{}y", (days / DAYS_PER_YEAR).round() as i64)
    }
}
