use tracing::warn;

use omer_core::format::trilingual_lines;
use omer_core::validation::ensure_integrity;

use crate::app::AppContext;
use crate::output::{print_json, validation_json};
use crate::ui::format::wrap;
use crate::ui::{badge, blank_line, header, print, table, Badge, Column};

pub fn handle_sefirot(ctx: &AppContext) -> anyhow::Result<()> {
    let service = ctx.service(None);
    let ui = ctx.ui_context();
    let sefirot = service.sefirot();

    if ui.mode.is_json() {
        return print_json(&sefirot);
    }
    if !ctx.quiet() {
        print(&ui, &header(&ui, "sefirot", None));
        blank_line(&ui);
    }
    let columns = [
        Column::new("Week"),
        Column::new("Sefirah"),
        Column::new("Hebrew"),
        Column::new("English"),
        Column::new("Attribute"),
    ];
    let rows: Vec<Vec<String>> = sefirot
        .iter()
        .map(|attribute| {
            vec![
                attribute.sefirah.position().to_string(),
                attribute.transliteration.to_string(),
                attribute.hebrew.to_string(),
                attribute.english.to_string(),
                attribute.attribute.to_string(),
            ]
        })
        .collect();
    print(&ui, &table(&ui, &columns, &rows));
    Ok(())
}

pub fn handle_ana_bekoach(ctx: &AppContext) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(None);
    let ui = ctx.ui_context();
    let lines = service.ana_bekoach();

    if ui.mode.is_json() {
        return print_json(lines);
    }
    if !ctx.quiet() {
        print(&ui, &header(&ui, "ana-bekoach", None));
        blank_line(&ui);
    }
    let width = ui.width.saturating_sub(4).max(20);
    for (number, line) in lines.iter().enumerate() {
        let texts = trilingual_lines(line, settings.output_format, settings.include_english);
        for (i, text) in texts.iter().enumerate() {
            for (j, wrapped) in wrap(text, width).iter().enumerate() {
                let prefix = if i == 0 && j == 0 {
                    format!("{:>2}. ", number + 1)
                } else {
                    "    ".to_string()
                };
                print(&ui, &format!("{}{}", prefix, wrapped));
            }
        }
    }
    Ok(())
}

pub fn handle_validate(ctx: &AppContext) -> anyhow::Result<()> {
    let service = ctx.service(None);
    let ui = ctx.ui_context();
    let issues = service.validate();

    if ui.mode.is_json() {
        print_json(&validation_json(&issues))?;
    } else if !ctx.quiet() {
        print(&ui, &header(&ui, "validate", None));
        for issue in &issues {
            print(&ui, &badge(&ui, Badge::Warn, &issue.to_string()));
        }
        if issues.is_empty() {
            print(&ui, &badge(&ui, Badge::Ok, "All tables are complete"));
        }
    }

    if !issues.is_empty() {
        warn!(count = issues.len(), "integrity issues found");
    }
    ensure_integrity(issues)?;
    Ok(())
}
