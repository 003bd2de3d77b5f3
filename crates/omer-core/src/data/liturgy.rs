//! Blessing, prayers and weekday names used around the count.

use super::Trilingual;

/// Blessing recited before counting.
pub const BLESSING: Trilingual = Trilingual {
    hebrew: "בָּרוּךְ אַתָּה הַשֵּׁם אֱלֹקֵינוּ מֶלֶךְ הָעוֹלָם, אֲשֶׁר קִדְּשָׁנוּ בְּמִצְווֹתָיו וְצִוָּנוּ עַל סְפִירַת הָעֹמֶר",
    transliteration: "Baruch atah HaShem Elokeinu melech ha'olam, asher kid'shanu b'mitzvotav v'tzivanu al sfirat ha'omer",
    english: "Blessed are You, Lord our God, King of the universe, who has sanctified us with His commandments and commanded us concerning the counting of the Omer",
};

/// Prayer said after the count.
pub const PRAYER: Trilingual = Trilingual {
    hebrew: "הָרַחֲמָן הוּא יַחֲזִיר לָנוּ עֲבוֹדַת בֵּית הַמִּקְדָּש לִמְקוֹמָהּ בִּמְהֵרָה בְיָמֵינוּ אָמֵן",
    transliteration: "HaRachaman hu yachazir lanu avodat beit hamikdash limkoma bimhera b'yameinu amen",
    english: "May the Merciful One restore the service of the Holy Temple to its place, speedily in our days, Amen",
};

pub const KAVANAH: Trilingual = Trilingual {
    hebrew: "יְהִי רָצוֹן מִלְּפָנֶיךָ הַשֵּׁם אֱלֹקֵינוּ וֵאלֹקֵי אֲבוֹתֵינוּ שֶׁבִּזְכוּת סְפִירַת הָעֹמֶר שֶׁסָּפַרְתִּי הַיּוֹם",
    transliteration: "Yehi ratzon milfanecha HaShem Elokeinu vElokei avoteinu shebizchut sfirat ha'omer shesafarti hayom",
    english: "May it be Your will, Lord our God and God of our fathers, that in the merit of the Omer counting that I counted today",
};

/// The seven lines of Ana BeKoach, one per week.
pub static ANA_BEKOACH: [Trilingual; 7] = [
    Trilingual {
        hebrew: "אָנָּא בְכֹחַ גְּדֻלַּת יְמִינְךָ תַּתִּיר צְרוּרָה",
        transliteration: "Ana b'koach g'dulat y'mincha tatir tz'rurah",
        english: "Please, by the power of Your great right hand, release the bound",
    },
    Trilingual {
        hebrew: "קַבֵּל רִנַּת עַמְּךָ שַׂגְּבֵנוּ טַהֲרֵנוּ נוֹרָא",
        transliteration: "Kabel rinat amcha sagveinu tahareinu nora",
        english: "Accept the song of Your people, strengthen us, purify us, Awesome One",
    },
    Trilingual {
        hebrew: "נָא גִבּוֹר דּוֹרְשֵׁי יִחוּדְךָ כְּבָבַת שָׁמְרֵם",
        transliteration: "Na gibor dorshei yichudcha k'bavat shamrem",
        english: "Please, Mighty One, those who seek Your unity, guard them like the apple of Your eye",
    },
    Trilingual {
        hebrew: "בָּרְכֵם טַהֲרֵם רַחֲמֵי צִדְקָתְךָ תָּמִיד גָּמְלֵם",
        transliteration: "Barchem tahrem rachamei tzidkatcha tamid gamlem",
        english: "Bless them, purify them, Your mercy and righteousness always reward them",
    },
    Trilingual {
        hebrew: "חֲסִין קָדוֹשׁ בְּרוֹב טוּבְךָ נַהֵל עֲדָתֶךָ",
        transliteration: "Chasin kadosh b'rov tuvcha nahel adatecha",
        english: "Mighty Holy One, in Your abundant goodness, guide Your congregation",
    },
    Trilingual {
        hebrew: "יָחִיד גֵּאֶה לְעַמְּךָ פְּנֵה זוֹכְרֵי קְדֻשָּׁתֶךָ",
        transliteration: "Yachid ge'eh l'amcha p'neh zochrei k'dushatecha",
        english: "Unique and Exalted One, turn to Your people who remember Your holiness",
    },
    Trilingual {
        hebrew: "שַׁוְעָתֵנוּ קַבֵּל וּשְׁמַע צַעֲקָתֵנוּ יוֹדֵעַ תַּעֲלֻמוֹת",
        transliteration: "Shavateinu kabel ushma tza'akateinu yode'a ta'alumot",
        english: "Accept our supplication and hear our cry, You who know all hidden things",
    },
];

/// Weekday names, Sunday first.
pub static WEEKDAYS: [Trilingual; 7] = [
    Trilingual {
        hebrew: "יוֹם רִאשׁוֹן",
        transliteration: "Yom Rishon",
        english: "Sunday",
    },
    Trilingual {
        hebrew: "יוֹם שֵׁנִי",
        transliteration: "Yom Sheni",
        english: "Monday",
    },
    Trilingual {
        hebrew: "יוֹם שְׁלִישִׁי",
        transliteration: "Yom Shlishi",
        english: "Tuesday",
    },
    Trilingual {
        hebrew: "יוֹם רְבִיעִי",
        transliteration: "Yom Revi'i",
        english: "Wednesday",
    },
    Trilingual {
        hebrew: "יוֹם חֲמִישִׁי",
        transliteration: "Yom Chamishi",
        english: "Thursday",
    },
    Trilingual {
        hebrew: "יוֹם שִׁשִּׁי",
        transliteration: "Yom Shishi",
        english: "Friday",
    },
    Trilingual {
        hebrew: "שַׁבָּת",
        transliteration: "Shabbat",
        english: "Sabbath",
    },
];

/// Weekday name for a chrono weekday.
pub fn weekday(day: chrono::Weekday) -> &'static Trilingual {
    &WEEKDAYS[day.num_days_from_sunday() as usize]
}
