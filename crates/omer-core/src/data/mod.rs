//! Static liturgical tables.
//!
//! Everything here is `'static` and read-only. [`OmerTables`] bundles the
//! tables the enricher and validation pass consume so tests can substitute a
//! deliberately defective set.

pub mod counting;
pub mod liturgy;
pub mod messages;
pub mod sefirot;
pub mod special_days;
pub mod traditions;

use serde::Serialize;

pub use sefirot::Sefirah;
pub use traditions::TraditionText;

use crate::tradition::{RecitationKind, Tradition};

/// One text in Hebrew, transliteration and English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Trilingual {
    pub hebrew: &'static str,
    pub transliteration: &'static str,
    pub english: &'static str,
}

/// One of the seven Sefirot with its display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SefirahAttribute {
    pub sefirah: Sefirah,
    pub hebrew: &'static str,
    pub transliteration: &'static str,
    /// English rendering of the quality (e.g. "Loving-kindness").
    pub english: &'static str,
    /// Short description of the quality.
    pub attribute: &'static str,
}

/// A day of the count that carries a name of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpecialDayEntry {
    pub ordinal: u8,
    pub name: &'static str,
    pub hebrew_name: &'static str,
    pub description: &'static str,
    pub description_hebrew: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prayer: Option<Trilingual>,
}

static SHIPPED: OmerTables = OmerTables {
    hebrew: &counting::HEBREW,
    transliteration: &counting::TRANSLITERATION,
    english: &counting::ENGLISH,
    sefirot: &sefirot::ATTRIBUTES,
    special_days: &special_days::SPECIAL_DAYS,
    traditions: &traditions::TRADITION_TEXTS,
};

/// The set of tables a [`crate::DayEnricher`] reads from.
///
/// Per-ordinal slices are indexed by `ordinal - 1`; the Sefirot slice by
/// `week - 1`. Short slices and empty strings count as missing entries.
#[derive(Debug, Clone, Copy)]
pub struct OmerTables {
    pub hebrew: &'static [&'static str],
    pub transliteration: &'static [&'static str],
    pub english: &'static [&'static str],
    pub sefirot: &'static [SefirahAttribute],
    pub special_days: &'static [SpecialDayEntry],
    pub traditions: &'static [TraditionText],
}

impl OmerTables {
    /// The tables compiled into the crate.
    pub fn shipped() -> &'static OmerTables {
        &SHIPPED
    }

    pub fn hebrew_text(&self, ordinal: u8) -> Option<&'static str> {
        lookup(self.hebrew, ordinal)
    }

    pub fn transliteration(&self, ordinal: u8) -> Option<&'static str> {
        lookup(self.transliteration, ordinal)
    }

    pub fn english_text(&self, ordinal: u8) -> Option<&'static str> {
        lookup(self.english, ordinal)
    }

    /// Sefirah attribute by position 1-7.
    pub fn sefirah(&self, position: u8) -> Option<&'static SefirahAttribute> {
        let index = usize::from(position).checked_sub(1)?;
        self.sefirot.get(index)
    }

    pub fn special_day(&self, ordinal: u8) -> Option<&'static SpecialDayEntry> {
        self.special_days.iter().find(|entry| entry.ordinal == ordinal)
    }

    /// Intro text a tradition prepends to the given recitation, if any.
    pub fn tradition_intro(
        &self,
        tradition: Tradition,
        kind: RecitationKind,
    ) -> Option<&'static Trilingual> {
        self.traditions
            .iter()
            .find(|text| text.tradition == tradition && text.kind == kind)
            .map(|text| &text.intro)
    }
}

fn lookup(table: &'static [&'static str], ordinal: u8) -> Option<&'static str> {
    let index = usize::from(ordinal).checked_sub(1)?;
    table.get(index).copied().filter(|text| !text.trim().is_empty())
}
