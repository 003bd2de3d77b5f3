//! Choosing which texts and date labels to show for a day.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::config::{DateDisplay, OmerConfig, OutputFormat};
use crate::data::Trilingual;
use crate::model::OmerDay;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Lines of a Hebrew, transliteration and English triple for `format`, in
/// display order. `include_english` appends the English line once.
fn text_lines<'a>(
    [hebrew, transliteration, english]: [&'a str; 3],
    format: OutputFormat,
    include_english: bool,
) -> Vec<&'a str> {
    let mut lines = match format {
        OutputFormat::Hebrew => vec![hebrew],
        OutputFormat::Transliterated => vec![transliteration],
        OutputFormat::Both => vec![hebrew, transliteration],
        OutputFormat::English => vec![english],
    };
    if include_english && format != OutputFormat::English {
        lines.push(english);
    }
    lines
}

/// Counting text lines for `format`, in display order.
pub fn counting_lines(day: &OmerDay, format: OutputFormat, include_english: bool) -> Vec<&str> {
    text_lines(
        [day.hebrew_text.as_str(), day.transliteration.as_str(), day.english_text.as_str()],
        format,
        include_english,
    )
}

/// Lines of a liturgical text for `format`, in display order.
pub fn trilingual_lines(
    text: &Trilingual,
    format: OutputFormat,
    include_english: bool,
) -> Vec<&'static str> {
    text_lines(
        [text.hebrew, text.transliteration, text.english],
        format,
        include_english,
    )
}

/// The single most relevant text for one-line output.
pub fn primary_text(day: &OmerDay, format: OutputFormat) -> &str {
    match format {
        OutputFormat::Hebrew | OutputFormat::Both => &day.hebrew_text,
        OutputFormat::Transliterated => &day.transliteration,
        OutputFormat::English => &day.english_text,
    }
}

/// Format a Gregorian date, falling back to ISO for an invalid pattern.
pub fn format_gregorian(date: NaiveDate, pattern: &str) -> String {
    let valid = !pattern.is_empty()
        && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error));
    let pattern = if valid { pattern } else { ISO_DATE_FORMAT };
    date.format(pattern).to_string()
}

/// Date label for a day under `display`.
///
/// Undated days always show the Hebrew date.
pub fn date_label(day: &OmerDay, display: DateDisplay, gregorian_format: &str) -> String {
    let hebrew = day.hebrew_date.to_string();
    let Some(date) = day.gregorian_date else {
        return hebrew;
    };
    match display {
        DateDisplay::HebrewOnly => hebrew,
        DateDisplay::GregorianOnly => format_gregorian(date, gregorian_format),
        DateDisplay::Both => format!("{hebrew} ({})", format_gregorian(date, gregorian_format)),
        DateDisplay::Iso => date.format(ISO_DATE_FORMAT).to_string(),
    }
}

/// "Day N - text", the compact one-line form.
pub fn compact_line(day: &OmerDay, format: OutputFormat) -> String {
    format!("{:>2} - {}", day.ordinal, primary_text(day, format))
}

/// Multi-line block for a day, honoring every display toggle in `config`.
pub fn day_block(day: &OmerDay, config: &OmerConfig) -> String {
    if config.compact_output {
        return compact_line(day, config.output_format);
    }
    let mut lines: Vec<String> = vec![format!(
        "Day {} of the Omer - {}",
        day.ordinal,
        date_label(day, config.date_display, &config.gregorian_format)
    )];
    lines.extend(
        counting_lines(day, config.output_format, config.include_english)
            .into_iter()
            .map(str::to_string),
    );
    if config.show_week_info {
        let mut week = format!("Week {}, day {}", day.week_number(), day.day_of_week());
        if let Some(combination) = &day.sefirah_combination {
            week.push_str(&format!(" - {}", combination.combined_transliteration));
        }
        lines.push(week);
    }
    if config.show_remaining_days {
        lines.push(format!("{} days remaining", day.days_remaining()));
    }
    if let Some(special) = &day.special_day_info {
        lines.push(format!("{} - {}", special.name, special.description));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::DayEnricher;
    use crate::model::Ordinal;
    use crate::tradition::Tradition;

    fn day(n: i64, date: Option<NaiveDate>) -> OmerDay {
        DayEnricher::shipped().enrich(Ordinal::new(n).unwrap(), date, Tradition::Ashkenazi)
    }

    fn may_26() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 26).unwrap()
    }

    #[test]
    fn test_both_means_hebrew_and_transliteration() {
        let day = day(1, None);
        let lines = counting_lines(&day, OutputFormat::Both, false);
        assert_eq!(lines, vec![day.hebrew_text.as_str(), day.transliteration.as_str()]);
    }

    #[test]
    fn test_include_english_is_not_duplicated() {
        let day = day(1, None);
        assert_eq!(counting_lines(&day, OutputFormat::English, true).len(), 1);
        assert_eq!(counting_lines(&day, OutputFormat::Hebrew, true).len(), 2);
    }

    #[test]
    fn test_trilingual_lines_match_counting_lines() {
        let text = crate::data::liturgy::KAVANAH;
        assert_eq!(trilingual_lines(&text, OutputFormat::Hebrew, false), vec![text.hebrew]);
        assert_eq!(
            trilingual_lines(&text, OutputFormat::Both, true),
            vec![text.hebrew, text.transliteration, text.english]
        );
        assert_eq!(trilingual_lines(&text, OutputFormat::English, true), vec![text.english]);
    }

    #[test]
    fn test_date_labels() {
        let day = day(33, Some(may_26()));
        assert_eq!(date_label(&day, DateDisplay::HebrewOnly, "%Y-%m-%d"), "18 Iyyar");
        assert_eq!(
            date_label(&day, DateDisplay::GregorianOnly, "%d/%m/%Y"),
            "26/05/2024"
        );
        assert_eq!(
            date_label(&day, DateDisplay::Both, "%Y-%m-%d"),
            "18 Iyyar (2024-05-26)"
        );
        assert_eq!(date_label(&day, DateDisplay::Iso, "%d/%m/%Y"), "2024-05-26");
    }

    #[test]
    fn test_undated_day_shows_hebrew() {
        let day = day(33, None);
        assert_eq!(date_label(&day, DateDisplay::Iso, "%Y-%m-%d"), "18 Iyyar");
    }

    #[test]
    fn test_invalid_pattern_falls_back_to_iso() {
        assert_eq!(format_gregorian(may_26(), "%Q"), "2024-05-26");
        assert_eq!(format_gregorian(may_26(), ""), "2024-05-26");
    }

    #[test]
    fn test_compact_block() {
        let config = OmerConfig {
            compact_output: true,
            output_format: OutputFormat::English,
            ..OmerConfig::default()
        };
        assert_eq!(
            day_block(&day(5, None), &config),
            " 5 - Today is five days of the Omer"
        );
    }

    #[test]
    fn test_full_block_mentions_special_day() {
        let config = OmerConfig {
            show_remaining_days: true,
            ..OmerConfig::default()
        };
        let block = day_block(&day(33, None), &config);
        assert!(block.starts_with("Day 33 of the Omer - 18 Iyyar"));
        assert!(block.contains("Week 5, day 5 - Hod sheb'Hod"));
        assert!(block.contains("16 days remaining"));
        assert!(block.contains("Lag BaOmer"));
    }
}
