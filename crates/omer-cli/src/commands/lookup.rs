use omer_core::format::{compact_line, ISO_DATE_FORMAT};
use omer_core::DateQuery;

use crate::app::AppContext;
use crate::cli::{GregorianDateArgs, HebrewDateArgs};
use crate::output::{day_json, gregorian_lookup_json, print_day, print_json};
use crate::ui::{blank_line, header, kv, print};

pub fn handle_hebrew_date(ctx: &AppContext, args: &HebrewDateArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(None);
    let ui = ctx.ui_context();

    let query = DateQuery::Hebrew {
        day: args.day,
        month: args.month.clone(),
    };
    let day = service.by_date(&query, settings.tradition)?;

    if ui.mode.is_json() {
        return print_json(&day_json(&day, None)?);
    }
    if ctx.quiet() {
        print(&ui, &compact_line(&day, settings.output_format));
        return Ok(());
    }
    print(&ui, &header(&ui, "hebrew-date", Some(&day.hebrew_date.to_string())));
    blank_line(&ui);
    print_day(&ui, &day, &settings);
    Ok(())
}

pub fn handle_gregorian_date(ctx: &AppContext, args: &GregorianDateArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(None);
    let ui = ctx.ui_context();

    let hebrew = service.hebrew_date_of(args.date)?;
    let day = service.by_date(&DateQuery::Gregorian(args.date), settings.tradition)?;

    if ui.mode.is_json() {
        return print_json(&gregorian_lookup_json(args.date, &hebrew, &day)?);
    }
    if ctx.quiet() {
        print(&ui, &compact_line(&day, settings.output_format));
        return Ok(());
    }
    let date = args.date.format(ISO_DATE_FORMAT).to_string();
    print(&ui, &header(&ui, "gregorian-date", Some(&date)));
    print(&ui, &kv(&ui, "Hebrew date", &hebrew.to_string()));
    blank_line(&ui);
    print_day(&ui, &day, &settings);
    Ok(())
}
