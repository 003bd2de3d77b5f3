//! Named days within the count.

use super::{SpecialDayEntry, Trilingual};

/// Shehecheyanu, recited on Lag BaOmer.
pub const SHEHECHEYANU: Trilingual = Trilingual {
    hebrew: "בָּרוּךְ אַתָּה הַשֵּׁם אֱלֹקֵינוּ מֶלֶךְ הָעוֹלָם שֶׁהֶחֱיָנוּ וְקִיְּמָנוּ וְהִגִּיעָנוּ לַזְּמַן הַזֶּה",
    transliteration: "Baruch atah HaShem Elokeinu melech ha'olam shehecheyanu v'kiyemanu v'higianu lazman hazeh",
    english: "Blessed are You, Lord our God, King of the universe, who has kept us alive, sustained us, and brought us to this season",
};

pub static SPECIAL_DAYS: [SpecialDayEntry; 2] = [
    SpecialDayEntry {
        ordinal: 18,
        name: "Pesach Sheni",
        hebrew_name: "פסח שני",
        description: "Second Passover",
        description_hebrew: "פסח שני",
        prayer: None,
    },
    SpecialDayEntry {
        ordinal: 33,
        name: "Lag BaOmer",
        hebrew_name: "ל\"ג בעומר",
        description: "33rd day of the Omer, a day of celebration",
        description_hebrew: "יום השלושים ושלושה לעומר, יום שמחה",
        prayer: Some(SHEHECHEYANU),
    },
];
