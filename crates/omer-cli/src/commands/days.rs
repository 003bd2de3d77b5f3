use omer_core::format::{compact_line, date_label, ISO_DATE_FORMAT};
use omer_core::{DateDisplay, OmerConfig};

use crate::app::AppContext;
use crate::cli::{DayArgs, RangeArgs, WeekArgs};
use crate::output::{day_json, print_day, print_days, print_json, print_recitation};
use crate::ui::format::{single_line, truncate};
use crate::ui::{blank_line, header, hint, kv, print, table, Column};

/// Widest description shown in the special-days table.
const DESCRIPTION_WIDTH: usize = 60;

pub fn handle_day(ctx: &AppContext, args: &DayArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(None);
    let ui = ctx.ui_context();

    let day = service.by_ordinal(args.number, settings.tradition)?;
    let blessing = args.blessing.then(|| service.blessing(settings.tradition));

    if ui.mode.is_json() {
        return print_json(&day_json(&day, blessing.as_ref())?);
    }
    if ctx.quiet() {
        print(&ui, &compact_line(&day, settings.output_format));
        return Ok(());
    }

    print(&ui, &header(&ui, "day", Some(&day.ordinal.to_string())));
    blank_line(&ui);
    print_day(&ui, &day, &settings);
    if let Some(blessing) = &blessing {
        blank_line(&ui);
        print_recitation(&ui, "Blessing", blessing, &settings);
    }
    Ok(())
}

pub fn handle_week(ctx: &AppContext, args: &WeekArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(None);
    let ui = ctx.ui_context();

    let summary =
        service.summary_by_sefirah_week(args.number, args.hebrew_year, settings.tradition)?;

    if ui.mode.is_json() {
        return print_json(&summary);
    }
    let compact = args.compact || ctx.quiet();
    if !compact {
        print(&ui, &header(&ui, "week", Some(&summary.week.to_string())));
        if let Some(sefirah) = &summary.sefirah {
            let label = format!(
                "{} ({}) - {}",
                sefirah.transliteration, sefirah.hebrew, sefirah.attribute
            );
            print(&ui, &kv(&ui, "Sefirah", &label));
        }
        blank_line(&ui);
    }
    let settings = if args.hebrew_year.is_some() {
        with_gregorian_labels(settings)
    } else {
        settings
    };
    print_days(&ui, &summary.days, &settings, compact);
    Ok(())
}

/// Dated listings always label days with their Gregorian date.
fn with_gregorian_labels(mut settings: OmerConfig) -> OmerConfig {
    if !settings.date_display.shows_gregorian() {
        settings.date_display = DateDisplay::Both;
    }
    settings
}

pub fn handle_range(ctx: &AppContext, args: &RangeArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(None);
    let ui = ctx.ui_context();

    let days = service.by_gregorian_range(args.start, args.end, settings.tradition)?;

    if ui.mode.is_json() {
        return print_json(&days);
    }
    let compact = args.compact || ctx.quiet();
    let span = format!(
        "{} to {}",
        args.start.format(ISO_DATE_FORMAT),
        args.end.format(ISO_DATE_FORMAT)
    );
    if !compact {
        print(&ui, &header(&ui, "range", Some(&span)));
        blank_line(&ui);
    }
    if days.is_empty() {
        if !ctx.quiet() {
            print(&ui, &format!("No Omer days from {}", span));
            print(&ui, &hint(&ui, "The count runs from 16 Nisan to 5 Sivan."));
        }
        return Ok(());
    }
    print_days(&ui, &days, &with_gregorian_labels(settings), compact);
    Ok(())
}

pub fn handle_special(ctx: &AppContext) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(None);
    let ui = ctx.ui_context();

    let days = service.find_special_days(settings.tradition);

    if ui.mode.is_json() {
        return print_json(&days);
    }
    if !ctx.quiet() {
        print(&ui, &header(&ui, "special", None));
        blank_line(&ui);
    }
    let columns = [
        Column::new("Day"),
        Column::new("Date"),
        Column::new("Name"),
        Column::new("Description"),
    ];
    let rows: Vec<Vec<String>> = days
        .iter()
        .filter_map(|day| {
            let info = day.special_day_info.as_ref()?;
            Some(vec![
                day.ordinal.to_string(),
                date_label(day, settings.date_display, &settings.gregorian_format),
                format!("{} ({})", info.name, info.hebrew_name),
                truncate(&single_line(info.description), DESCRIPTION_WIDTH),
            ])
        })
        .collect();
    print(&ui, &table(&ui, &columns, &rows));
    Ok(())
}
