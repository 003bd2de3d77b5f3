//! Assembling `OmerDay` records.

use chrono::NaiveDate;
use tracing::debug;

use crate::data::OmerTables;
use crate::mapper;
use crate::model::{OmerDay, Ordinal, SefirahCombination};
use crate::tradition::Tradition;

/// Builds full day records from an ordinal and the static tables.
///
/// Sefirah combinations are computed once per enricher. Missing table entries
/// degrade to a placeholder; only the validation pass reports them.
#[derive(Debug, Clone)]
pub struct DayEnricher {
    tables: &'static OmerTables,
    combinations: Vec<Option<SefirahCombination>>,
}

impl DayEnricher {
    pub fn new(tables: &'static OmerTables) -> Self {
        let combinations = Ordinal::all()
            .map(|ordinal| {
                let week = tables.sefirah(ordinal.week_number())?;
                let day = tables.sefirah(ordinal.day_of_week())?;
                Some(SefirahCombination::new(*week, *day))
            })
            .collect();
        Self {
            tables,
            combinations,
        }
    }

    /// Enricher over the compiled-in tables.
    pub fn shipped() -> Self {
        Self::new(OmerTables::shipped())
    }

    pub fn tables(&self) -> &'static OmerTables {
        self.tables
    }

    pub fn combination(&self, ordinal: Ordinal) -> Option<&SefirahCombination> {
        self.combinations.get(ordinal.index())?.as_ref()
    }

    pub fn enrich(
        &self,
        ordinal: Ordinal,
        gregorian_date: Option<NaiveDate>,
        tradition: Tradition,
    ) -> OmerDay {
        let n = ordinal.get();
        OmerDay {
            ordinal,
            hebrew_text: text_or_placeholder(self.tables.hebrew_text(n), ordinal, "hebrew"),
            transliteration: text_or_placeholder(
                self.tables.transliteration(n),
                ordinal,
                "transliteration",
            ),
            english_text: text_or_placeholder(self.tables.english_text(n), ordinal, "english"),
            hebrew_date: mapper::to_hebrew_date(ordinal),
            gregorian_date,
            sefirah_combination: self.combination(ordinal).cloned(),
            special_day_info: self.tables.special_day(n).copied(),
            tradition,
        }
    }
}

impl Default for DayEnricher {
    fn default() -> Self {
        Self::shipped()
    }
}

fn text_or_placeholder(text: Option<&str>, ordinal: Ordinal, field: &str) -> String {
    match text {
        Some(text) => text.to_string(),
        None => {
            debug!(ordinal = ordinal.get(), field, "using placeholder for missing text");
            placeholder(ordinal)
        }
    }
}

/// Text substituted for a missing table entry.
pub fn placeholder(ordinal: Ordinal) -> String {
    format!("Missing text for day {ordinal}")
}
