//! Traditions and the recitations they customize.
//!
//! A tradition never changes the count itself. It only prepends an intro to
//! the blessing (Sefardi, Ashkenazi) or to the closing prayer (Chassidic).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::{liturgy, OmerTables, Trilingual};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tradition {
    Sefardi,
    #[default]
    Ashkenazi,
    Chassidic,
}

impl Tradition {
    pub const ALL: [Tradition; 3] = [Self::Sefardi, Self::Ashkenazi, Self::Chassidic];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sefardi => "sefardi",
            Self::Ashkenazi => "ashkenazi",
            Self::Chassidic => "chassidic",
        }
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tradition name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tradition: {0} (expected sefardi, ashkenazi, or chassidic)")]
pub struct UnknownTradition(pub String);

impl FromStr for Tradition {
    type Err = UnknownTradition;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "sefardi" | "sephardi" | "sefard" => Ok(Self::Sefardi),
            "ashkenazi" | "ashkenaz" => Ok(Self::Ashkenazi),
            "chassidic" | "hasidic" | "chabad" => Ok(Self::Chassidic),
            _ => Err(UnknownTradition(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecitationKind {
    Blessing,
    Prayer,
}

/// A canonical text, possibly preceded by a tradition's intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recitation {
    pub kind: RecitationKind,
    #[serde(flatten)]
    pub text: Trilingual,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<Trilingual>,
}

impl Recitation {
    pub fn canonical(kind: RecitationKind, text: Trilingual) -> Self {
        Self {
            kind,
            text,
            intro: None,
        }
    }
}

/// Overlay a tradition's intro onto a canonical recitation.
///
/// Returns a new value; the canonical record is left as it was when the
/// tradition has no override for this kind.
pub fn apply_tradition(
    tables: &OmerTables,
    canonical: Recitation,
    tradition: Tradition,
) -> Recitation {
    match tables.tradition_intro(tradition, canonical.kind) {
        Some(intro) => Recitation {
            intro: Some(*intro),
            ..canonical
        },
        None => canonical,
    }
}

/// The blessing as said in `tradition`.
pub fn blessing(tables: &OmerTables, tradition: Tradition) -> Recitation {
    apply_tradition(
        tables,
        Recitation::canonical(RecitationKind::Blessing, liturgy::BLESSING),
        tradition,
    )
}

/// The post-count prayer as said in `tradition`.
pub fn prayer(tables: &OmerTables, tradition: Tradition) -> Recitation {
    apply_tradition(
        tables,
        Recitation::canonical(RecitationKind::Prayer, liturgy::PRAYER),
        tradition,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ashkenazi() {
        assert_eq!(Tradition::default(), Tradition::Ashkenazi);
    }

    #[test]
    fn test_parse_accepts_common_spellings() {
        assert_eq!("Sefardi".parse::<Tradition>().unwrap(), Tradition::Sefardi);
        assert_eq!("sephardi".parse::<Tradition>().unwrap(), Tradition::Sefardi);
        assert_eq!(" CHASSIDIC ".parse::<Tradition>().unwrap(), Tradition::Chassidic);
        assert!("yemenite".parse::<Tradition>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for tradition in Tradition::ALL {
            assert_eq!(tradition.to_string().parse::<Tradition>().unwrap(), tradition);
        }
    }

    #[test]
    fn test_blessing_gets_intro_for_ashkenazi() {
        let tables = OmerTables::shipped();
        let recitation = blessing(tables, Tradition::Ashkenazi);
        assert_eq!(recitation.text, liturgy::BLESSING);
        assert!(recitation
            .intro
            .is_some_and(|intro| intro.transliteration.starts_with("Hineni")));
    }

    #[test]
    fn test_chassidic_prefixes_prayer_not_blessing() {
        let tables = OmerTables::shipped();
        assert_eq!(blessing(tables, Tradition::Chassidic).intro, None);
        assert!(prayer(tables, Tradition::Chassidic).intro.is_some());
    }

    #[test]
    fn test_overlay_leaves_canonical_text_untouched() {
        let tables = OmerTables::shipped();
        let canonical = Recitation::canonical(RecitationKind::Prayer, liturgy::PRAYER);
        let overlaid = apply_tradition(tables, canonical, Tradition::Sefardi);
        assert_eq!(overlaid, canonical);
    }

    #[test]
    fn test_serialized_recitation_is_flat() {
        let tables = OmerTables::shipped();
        let value = serde_json::to_value(blessing(tables, Tradition::Sefardi)).unwrap();
        assert_eq!(value["kind"], "blessing");
        assert!(value["hebrew"].is_string());
        assert!(value["intro"]["english"].is_string());
    }
}
