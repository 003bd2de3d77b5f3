use omer_core::format::{compact_line, primary_text, trilingual_lines, ISO_DATE_FORMAT};
use omer_core::{
    CountingStatus, CurrentStatus, OmerConfig, OutputFormat, OutsideStatus, SefirahCombination,
};

use crate::app::AppContext;
use crate::cli::{StatusArgs, TodayArgs};
use crate::errors::CliError;
use crate::output::{print_day, print_json, print_recitation};
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, divider, header, kv, print, Badge, UiContext};

const OUTSIDE_HINT: &str =
    "Hint: The count runs from 16 Nisan to 5 Sivan. Run `omer export` to see this year's dates.";

pub fn handle_today(ctx: &AppContext, args: &TodayArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(args.date);
    let ui = ctx.ui_context();

    let counting = match service.current_status(settings.tradition) {
        CurrentStatus::Counting(counting) => counting,
        CurrentStatus::Outside(outside) => {
            return Err(CliError::not_found(
                format!("{}: {}", outside.date.format(ISO_DATE_FORMAT), outside.message),
                OUTSIDE_HINT,
            )
            .into());
        }
    };

    if ui.mode.is_json() {
        return print_json(&counting);
    }
    if ctx.quiet() {
        print(&ui, &compact_line(&counting.day, settings.output_format));
        return Ok(());
    }

    let date = counting.date.format(ISO_DATE_FORMAT).to_string();
    print(&ui, &header(&ui, "today", Some(&date)));
    blank_line(&ui);
    print_day(&ui, &counting.day, &settings);

    if args.sefirah {
        if let Some(combination) = &counting.day.sefirah_combination {
            blank_line(&ui);
            print_sefirah(&ui, combination, &settings);
        }
    }
    if args.blessing || args.prayer {
        print(&ui, &divider(&ui));
    }
    if args.blessing {
        print_recitation(&ui, "Blessing", &counting.blessing, &settings);
    }
    if args.prayer {
        if args.blessing {
            blank_line(&ui);
        }
        print_recitation(&ui, "Prayer", &counting.prayer, &settings);
    }
    if let Some(special) = &counting.special_prayer {
        blank_line(&ui);
        print(&ui, &styled("Special prayer", styles::bold(), ui.color));
        for line in trilingual_lines(special, settings.output_format, settings.include_english) {
            print(&ui, line);
        }
    }
    Ok(())
}

fn print_sefirah(ui: &UiContext, combination: &SefirahCombination, settings: &OmerConfig) {
    print(ui, &styled("Sefirah", styles::bold(), ui.color));
    print(ui, &combination.combined_hebrew);
    print(ui, &combination.combined_transliteration);
    if settings.include_english || settings.output_format == OutputFormat::English {
        print(ui, &combination.combined_english);
    }
    let week = &combination.week_attribute;
    let day = &combination.day_attribute;
    let week_label = format!("{} - {}", week.transliteration, week.attribute);
    let day_label = format!("{} - {}", day.transliteration, day.attribute);
    print(ui, &kv(ui, "Week", &week_label));
    print(ui, &kv(ui, "Day", &day_label));
}

pub fn handle_status(ctx: &AppContext, args: &StatusArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(args.date);
    let ui = ctx.ui_context();
    let status = service.current_status(settings.tradition);

    if ui.mode.is_json() {
        return print_json(&status);
    }
    match &status {
        CurrentStatus::Counting(counting) => {
            if ctx.quiet() {
                print(&ui, &counting.day.ordinal.to_string());
                return Ok(());
            }
            print_counting(&ui, counting, &settings);
        }
        CurrentStatus::Outside(outside) => {
            if ctx.quiet() {
                return Ok(());
            }
            print_outside(&ui, outside);
        }
    }
    Ok(())
}

fn print_counting(ui: &UiContext, status: &CountingStatus, settings: &OmerConfig) {
    let day = &status.day;
    print(ui, &header(ui, "status", None));
    print(ui, &kv(ui, "Date", &status.date.format(ISO_DATE_FORMAT).to_string()));
    print(ui, &kv(ui, "Hebrew date", &day.hebrew_date.to_string()));
    let weekday = &status.weekday;
    let weekday_label = format!("{} ({})", weekday.transliteration, weekday.hebrew);
    let week_label = format!("{}, day {}", day.week_number(), day.day_of_week());
    print(ui, &kv(ui, "Weekday", &weekday_label));
    print(ui, &kv(ui, "Omer day", &format!("{} of 49", day.ordinal)));
    print(ui, &kv(ui, "Week", &week_label));
    if let Some(combination) = &day.sefirah_combination {
        print(ui, &kv(ui, "Sefirah", &combination.combined_transliteration));
    }
    print(ui, &kv(ui, "Remaining", &day.days_remaining().to_string()));
    if let Some(special) = &day.special_day_info {
        print(ui, &kv(ui, "Special", special.name));
    }
    let count = primary_text(day, settings.output_format);
    print(ui, &kv(ui, "Count", count));
}

fn print_outside(ui: &UiContext, status: &OutsideStatus) {
    print(ui, &header(ui, "status", None));
    print(ui, &kv(ui, "Date", &status.date.format(ISO_DATE_FORMAT).to_string()));
    if ui.mode.is_pretty() {
        print(ui, &badge(ui, Badge::Info, status.localized.english));
        print(ui, status.localized.hebrew);
    } else {
        print(ui, "status=outside");
        print(ui, &kv(ui, "Reason", &status.message));
    }
}
