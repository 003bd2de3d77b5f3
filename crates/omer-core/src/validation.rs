//! Integrity checks over the static tables.
//!
//! The enricher never fails on a missing entry; this pass is how defects are
//! found. It returns a list so callers decide whether an issue is fatal.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::data::OmerTables;
use crate::error::{OmerError, Result};
use crate::model::Ordinal;
use crate::SEFIROT_COUNT;

/// Which table an issue was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityTable {
    HebrewText,
    Transliteration,
    EnglishText,
    SefirahCombination,
    SefirahAttribute,
    SpecialDay,
}

impl fmt::Display for IntegrityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HebrewText => "Hebrew text",
            Self::Transliteration => "transliteration",
            Self::EnglishText => "English text",
            Self::SefirahCombination => "Sefirah combination",
            Self::SefirahAttribute => "Sefirah attribute",
            Self::SpecialDay => "special day",
        };
        f.write_str(name)
    }
}

/// One missing or inconsistent entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IntegrityIssue {
    pub table: IntegrityTable,
    /// Ordinal, week or table position the issue refers to.
    pub position: u8,
    pub message: String,
}

impl IntegrityIssue {
    fn missing(table: IntegrityTable, position: u8, unit: &str) -> Self {
        Self {
            table,
            position,
            message: format!("Missing {table} for {unit} {position}"),
        }
    }
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Check every per-ordinal table, the Sefirot and the special days.
pub fn validate_tables(tables: &OmerTables) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for ordinal in Ordinal::all() {
        let n = ordinal.get();
        if tables.hebrew_text(n).is_none() {
            issues.push(IntegrityIssue::missing(IntegrityTable::HebrewText, n, "day"));
        }
        if tables.transliteration(n).is_none() {
            issues.push(IntegrityIssue::missing(
                IntegrityTable::Transliteration,
                n,
                "day",
            ));
        }
        if tables.english_text(n).is_none() {
            issues.push(IntegrityIssue::missing(IntegrityTable::EnglishText, n, "day"));
        }
        let has_combination = tables.sefirah(ordinal.week_number()).is_some()
            && tables.sefirah(ordinal.day_of_week()).is_some();
        if !has_combination {
            issues.push(IntegrityIssue::missing(
                IntegrityTable::SefirahCombination,
                n,
                "day",
            ));
        }
    }

    for position in 1..=SEFIROT_COUNT {
        match tables.sefirah(position) {
            None => issues.push(IntegrityIssue::missing(
                IntegrityTable::SefirahAttribute,
                position,
                "week",
            )),
            Some(attribute) if attribute.sefirah.position() != position => {
                issues.push(IntegrityIssue {
                    table: IntegrityTable::SefirahAttribute,
                    position,
                    message: format!(
                        "Sefirah at position {position} is {}, expected position {}",
                        attribute.sefirah,
                        attribute.sefirah.position()
                    ),
                });
            }
            Some(_) => {}
        }
    }

    for (index, entry) in tables.special_days.iter().enumerate() {
        let position = u8::try_from(index + 1).unwrap_or(u8::MAX);
        if Ordinal::new(i64::from(entry.ordinal)).is_err() {
            issues.push(IntegrityIssue {
                table: IntegrityTable::SpecialDay,
                position,
                message: format!(
                    "Special day {} has ordinal {} outside the count",
                    entry.name, entry.ordinal
                ),
            });
        }
        if entry.name.trim().is_empty() || entry.description.trim().is_empty() {
            issues.push(IntegrityIssue {
                table: IntegrityTable::SpecialDay,
                position,
                message: format!(
                    "Special day for day {} is missing a name or description",
                    entry.ordinal
                ),
            });
        }
    }

    for issue in &issues {
        warn!(table = %issue.table, position = issue.position, "{}", issue.message);
    }
    issues
}

/// Fail with `DataIntegrity` carrying `issues` unless there are none.
pub fn ensure_integrity(issues: Vec<IntegrityIssue>) -> Result<()> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(OmerError::DataIntegrity { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sefirot::ATTRIBUTES;
    use crate::data::SpecialDayEntry;
    use crate::error::ErrorKind;

    #[test]
    fn test_shipped_tables_pass() {
        assert!(validate_tables(OmerTables::shipped()).is_empty());
        assert!(ensure_integrity(validate_tables(OmerTables::shipped())).is_ok());
    }

    #[test]
    fn test_reports_missing_texts() {
        static TWO_DAYS: [&str; 2] = ["one", ""];
        let tables = OmerTables {
            transliteration: &TWO_DAYS,
            ..*OmerTables::shipped()
        };
        let issues = validate_tables(&tables);
        // Day 2 is blank and days 3-49 are absent.
        assert_eq!(issues.len(), 48);
        assert!(issues
            .iter()
            .all(|issue| issue.table == IntegrityTable::Transliteration));
        assert_eq!(issues[0].message, "Missing transliteration for day 2");
    }

    #[test]
    fn test_missing_sefirah_breaks_its_combinations() {
        let tables = OmerTables {
            sefirot: &ATTRIBUTES[..6],
            ..*OmerTables::shipped()
        };
        let issues = validate_tables(&tables);
        let attribute_issues: Vec<_> = issues
            .iter()
            .filter(|issue| issue.table == IntegrityTable::SefirahAttribute)
            .collect();
        assert_eq!(attribute_issues.len(), 1);
        assert_eq!(attribute_issues[0].position, 7);
        // Week 7 (7 days) plus day-of-week 7 in weeks 1-6.
        let combination_issues = issues
            .iter()
            .filter(|issue| issue.table == IntegrityTable::SefirahCombination)
            .count();
        assert_eq!(combination_issues, 13);
    }

    #[test]
    fn test_special_day_outside_count() {
        static BAD: [SpecialDayEntry; 1] = [SpecialDayEntry {
            ordinal: 50,
            name: "Shavuot",
            hebrew_name: "שבועות",
            description: "Festival of Weeks",
            description_hebrew: "חג השבועות",
            prayer: None,
        }];
        let tables = OmerTables {
            special_days: &BAD,
            ..*OmerTables::shipped()
        };
        let err = ensure_integrity(validate_tables(&tables)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataIntegrity);
        let OmerError::DataIntegrity { issues } = err else {
            panic!("expected data integrity error");
        };
        assert!(!issues.is_empty());
    }
}
