//! Tradition-specific introductions.

use super::Trilingual;
use crate::tradition::{RecitationKind, Tradition};

/// Intro text a tradition attaches to one recitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraditionText {
    pub tradition: Tradition,
    pub kind: RecitationKind,
    pub intro: Trilingual,
}

pub static TRADITION_TEXTS: [TraditionText; 3] = [
    TraditionText {
        tradition: Tradition::Sefardi,
        kind: RecitationKind::Blessing,
        intro: Trilingual {
            hebrew: "בְּמִצְוַת עֲשֵׂה שֶׁנִּצְטַוֵּינוּ עַל יְדֵי מֹשֶׁה רַבֵּנוּ",
            transliteration: "B'mitzvat aseh she'nitzta'vinu al yedei Moshe rabbeinu",
            english: "With the positive commandment that we were commanded through Moses our teacher",
        },
    },
    TraditionText {
        tradition: Tradition::Ashkenazi,
        kind: RecitationKind::Blessing,
        intro: Trilingual {
            hebrew: "הִנְנִי מוּכָן וּמְזֻמָּן לְקַיֵּם מִצְוַת עֲשֵׂה שֶׁל סְפִירַת הָעֹמֶר",
            transliteration: "Hineni muchan umzuman l'kayem mitzvat aseh shel sfirat ha'omer",
            english: "Behold, I am ready and prepared to fulfill the positive commandment of counting the Omer",
        },
    },
    TraditionText {
        tradition: Tradition::Chassidic,
        kind: RecitationKind::Prayer,
        intro: Trilingual {
            hebrew: "לְשֵׁם יִחוּד קוּדְשָׁא בְּרִיךְ הוּא וּשְׁכִינְתֵּהּ",
            transliteration: "L'shem yichud Kudsha Brich Hu ushchinteih",
            english: "For the sake of the unification of the Holy One, blessed be He, and His Divine Presence",
        },
    },
];
