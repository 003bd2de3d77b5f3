//! Short user-facing messages for each failure, in English and Hebrew.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LocalizedMessage {
    pub english: &'static str,
    pub hebrew: &'static str,
}

pub const DAY_OUT_OF_RANGE: LocalizedMessage = LocalizedMessage {
    english: "Day must be between 1 and 49",
    hebrew: "יום חייב להיות בין 1 ל-49",
};

pub const WEEK_OUT_OF_RANGE: LocalizedMessage = LocalizedMessage {
    english: "Week must be between 1 and 7",
    hebrew: "שבוע חייב להיות בין 1 ל-7",
};

pub const INVALID_DATE_RANGE: LocalizedMessage = LocalizedMessage {
    english: "Start date must not be after end date",
    hebrew: "תאריך ההתחלה חייב להיות לפני תאריך הסיום",
};

pub const INVALID_MONTH: LocalizedMessage = LocalizedMessage {
    english: "Month must be Nisan, Iyyar or Sivan",
    hebrew: "החודש חייב להיות ניסן, אייר או סיון",
};

pub const INVALID_DAY: LocalizedMessage = LocalizedMessage {
    english: "Invalid day for Omer counting",
    hebrew: "יום לא חוקי לעומר",
};

pub const NOT_IN_PERIOD: LocalizedMessage = LocalizedMessage {
    english: "Not during the Omer counting period",
    hebrew: "לא בתקופת ספירת העומר",
};

pub const DATE_ERROR: LocalizedMessage = LocalizedMessage {
    english: "Date error",
    hebrew: "שגיאת תאריך",
};

pub const DATA_INTEGRITY: LocalizedMessage = LocalizedMessage {
    english: "Omer data tables are incomplete",
    hebrew: "נתוני העומר אינם שלמים",
};
