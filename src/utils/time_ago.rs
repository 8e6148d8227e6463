// ============================================================================
// TIME AGO - Formato relativo de timestamps ("5 minutes ago")
// ============================================================================

use chrono::{DateTime, Utc};

/// Formatear `createdAt` relativo al instante actual
pub fn time_ago(timestamp: DateTime<Utc>) -> String {
    time_ago_from(timestamp, Utc::now())
}

/// Formatear un timestamp relativo a `now` (separado para poder testearlo)
pub fn time_ago_from(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();

    if seconds < 45 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes.max(1), "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = hours / 24;
    if days < 30 {
        return plural(days, "day");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }

    plural(months / 12, "year")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2021-11-16T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_just_now() {
        assert_eq!(time_ago_from(now() - Duration::seconds(10), now()), "just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(time_ago_from(now() - Duration::minutes(1), now()), "1 minute ago");
        assert_eq!(time_ago_from(now() - Duration::minutes(5), now()), "5 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(time_ago_from(now() - Duration::hours(2), now()), "2 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(time_ago_from(now() - Duration::days(3), now()), "3 days ago");
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(time_ago_from(now() - Duration::days(60), now()), "2 months ago");
        assert_eq!(time_ago_from(now() - Duration::days(800), now()), "2 years ago");
    }
}
