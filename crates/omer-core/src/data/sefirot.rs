//! The seven lower Sefirot, in counting order.

use std::fmt;

use serde::Serialize;

use super::SefirahAttribute;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Sefirah {
    Chesed,
    Gevurah,
    Tiferet,
    Netzach,
    Hod,
    Yesod,
    Malchut,
}

impl Sefirah {
    pub const ALL: [Sefirah; 7] = [
        Self::Chesed,
        Self::Gevurah,
        Self::Tiferet,
        Self::Netzach,
        Self::Hod,
        Self::Yesod,
        Self::Malchut,
    ];

    /// Position 1-7 in counting order.
    pub fn position(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for Sefirah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub static ATTRIBUTES: [SefirahAttribute; 7] = [
    SefirahAttribute {
        sefirah: Sefirah::Chesed,
        hebrew: "חֶסֶד",
        transliteration: "Chesed",
        english: "Loving-kindness",
        attribute: "Unbounded giving and love",
    },
    SefirahAttribute {
        sefirah: Sefirah::Gevurah,
        hebrew: "גְּבוּרָה",
        transliteration: "Gevurah",
        english: "Strength/Discipline",
        attribute: "Restraint, judgment and measured boundaries",
    },
    SefirahAttribute {
        sefirah: Sefirah::Tiferet,
        hebrew: "תִּפְאֶרֶת",
        transliteration: "Tiferet",
        english: "Beauty/Harmony",
        attribute: "Balance of giving and restraint; compassion and truth",
    },
    SefirahAttribute {
        sefirah: Sefirah::Netzach,
        hebrew: "נֶצַח",
        transliteration: "Netzach",
        english: "Victory/Endurance",
        attribute: "Perseverance and initiative",
    },
    SefirahAttribute {
        sefirah: Sefirah::Hod,
        hebrew: "הוֹד",
        transliteration: "Hod",
        english: "Splendor/Humility",
        attribute: "Acknowledgement, gratitude and yielding",
    },
    SefirahAttribute {
        sefirah: Sefirah::Yesod,
        hebrew: "יְסוֹד",
        transliteration: "Yesod",
        english: "Foundation/Connection",
        attribute: "Bonding and channelling the qualities above",
    },
    SefirahAttribute {
        sefirah: Sefirah::Malchut,
        hebrew: "מַלְכוּת",
        transliteration: "Malchut",
        english: "Kingship/Sovereignty",
        attribute: "Receptivity and expression in action",
    },
];
