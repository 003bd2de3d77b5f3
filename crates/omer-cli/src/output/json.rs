//! JSON output for query results.

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use omer_core::calendar::month_name;
use omer_core::{HebrewYmd, IntegrityIssue, OmerConfig, OmerDay, Recitation};

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A day record, with the blessing attached when requested.
pub fn day_json(day: &OmerDay, blessing: Option<&Recitation>) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(day)?;
    if let (Some(blessing), Some(object)) = (blessing, value.as_object_mut()) {
        object.insert("blessing".to_string(), serde_json::to_value(blessing)?);
    }
    Ok(value)
}

/// A Gregorian date with its Hebrew date and Omer day.
pub fn gregorian_lookup_json(
    date: NaiveDate,
    hebrew: &HebrewYmd,
    day: &OmerDay,
) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "gregorian_date": date,
        "hebrew_date": {
            "year": hebrew.year,
            "month": hebrew.month,
            "month_name": month_name(hebrew.month),
            "day": hebrew.day,
        },
        "omer_day": serde_json::to_value(day)?,
    }))
}

/// Result of an integrity check.
pub fn validation_json(issues: &[IntegrityIssue]) -> serde_json::Value {
    serde_json::json!({
        "valid": issues.is_empty(),
        "issue_count": issues.len(),
        "issues": issues,
    })
}

/// Effective settings and where they came from.
pub fn settings_json(path: &Path, exists: bool, settings: &OmerConfig) -> serde_json::Value {
    serde_json::json!({
        "config_path": path.to_string_lossy(),
        "config_exists": exists,
        "settings": settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use omer_core::{QueryService, Tradition};

    #[test]
    fn test_day_json_without_blessing() {
        let day = QueryService::new().by_ordinal(33, Tradition::Ashkenazi).unwrap();
        let value = day_json(&day, None).unwrap();
        assert_eq!(value["ordinal"], 33);
        assert!(value.get("blessing").is_none());
    }

    #[test]
    fn test_day_json_with_blessing() {
        let service = QueryService::new();
        let day = service.by_ordinal(1, Tradition::Sefardi).unwrap();
        let blessing = service.blessing(Tradition::Sefardi);
        let value = day_json(&day, Some(&blessing)).unwrap();
        assert_eq!(value["blessing"]["kind"], "blessing");
        assert!(value["blessing"]["intro"].is_object());
    }

    #[test]
    fn test_gregorian_lookup_json() {
        let service = QueryService::new();
        let date = NaiveDate::from_ymd_opt(2024, 5, 26).unwrap();
        let hebrew = service.hebrew_date_of(date).unwrap();
        let day = service
            .by_date(&omer_core::DateQuery::Gregorian(date), Tradition::Ashkenazi)
            .unwrap();
        let value = gregorian_lookup_json(date, &hebrew, &day).unwrap();
        assert_eq!(value["gregorian_date"], "2024-05-26");
        assert_eq!(value["hebrew_date"]["month_name"], "Iyyar");
        assert_eq!(value["hebrew_date"]["year"], 5784);
        assert_eq!(value["omer_day"]["ordinal"], 33);
    }

    #[test]
    fn test_validation_json() {
        let value = validation_json(&[]);
        assert_eq!(value["valid"], true);
        assert_eq!(value["issue_count"], 0);
    }

    #[test]
    fn test_settings_json() {
        let value = settings_json(Path::new("/tmp/omer.toml"), false, &OmerConfig::default());
        assert_eq!(value["config_exists"], false);
        assert_eq!(value["settings"]["output_format"], "hebrew");
        assert_eq!(value["settings"]["tradition"], "ashkenazi");
    }
}
