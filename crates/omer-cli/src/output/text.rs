//! Text and table output for days and recitations.

use omer_core::format::{compact_line, date_label, day_block, primary_text, trilingual_lines};
use omer_core::{OmerConfig, OmerDay, Recitation};

use crate::ui::theme::{styled, styles, SPECIAL_MARK};
use crate::ui::{print, simple_table, Column, UiContext};

/// Print a day as a block: heading line, counting text, toggled details.
pub fn print_day(ui: &UiContext, day: &OmerDay, settings: &OmerConfig) {
    let block = day_block(day, settings);
    let mut lines = block.lines();
    if let Some(first) = lines.next() {
        print(ui, &styled(first, styles::bold(), ui.color && ui.mode.is_pretty()));
    }
    for line in lines {
        print(ui, line);
    }
}

/// Table rows for a list of days: day, date, text, Sefirah.
pub fn day_rows(days: &[OmerDay], settings: &OmerConfig, unicode: bool) -> Vec<Vec<String>> {
    days.iter()
        .map(|day| {
            let mark = if day.is_special_day() {
                format!(" {}", SPECIAL_MARK.get(unicode))
            } else {
                String::new()
            };
            vec![
                format!("{}{}", day.ordinal, mark),
                date_label(day, settings.date_display, &settings.gregorian_format),
                primary_text(day, settings.output_format).to_string(),
                day.sefirah_combination
                    .as_ref()
                    .map(|c| c.combined_transliteration.clone())
                    .unwrap_or_default(),
            ]
        })
        .collect()
}

/// Print a list of days, one line each when compact.
pub fn print_days(ui: &UiContext, days: &[OmerDay], settings: &OmerConfig, compact: bool) {
    if compact || settings.compact_output {
        for day in days {
            print(ui, &compact_line(day, settings.output_format));
        }
        return;
    }
    let columns = [
        Column::new("Day"),
        Column::new("Date"),
        Column::new("Count"),
        Column::new("Sefirah"),
    ];
    print(ui, &simple_table(ui, &columns, &day_rows(days, settings, ui.unicode)));
}

/// Print a titled recitation: its tradition intro first, then the text.
pub fn print_recitation(
    ui: &UiContext,
    title: &str,
    recitation: &Recitation,
    settings: &OmerConfig,
) {
    let (format, english) = (settings.output_format, settings.include_english);
    print(ui, &styled(title, styles::bold(), ui.color && ui.mode.is_pretty()));
    if let Some(intro) = &recitation.intro {
        for line in trilingual_lines(intro, format, english) {
            print(ui, &styled(line, styles::dim(), ui.color && ui.mode.is_pretty()));
        }
    }
    for line in trilingual_lines(&recitation.text, format, english) {
        print(ui, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omer_core::{OutputFormat, QueryService, Tradition};

    #[test]
    fn test_day_rows_mark_special_days() {
        let service = QueryService::new();
        let days = service.by_week(5, None, Tradition::Ashkenazi).unwrap();
        let settings = OmerConfig {
            output_format: OutputFormat::Transliterated,
            ..OmerConfig::default()
        };
        let rows = day_rows(&days, &settings, false);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0][0], "29");
        assert_eq!(rows[4][0], "33 *");
        assert_eq!(rows[4][1], "18 Iyyar");
        assert_eq!(rows[4][3], "Hod sheb'Hod");
    }
}
