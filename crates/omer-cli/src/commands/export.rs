use tracing::info;

use omer_core::ExportFormat;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::output::print_json;
use crate::ui::{print, receipt};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let service = ctx.service(None);
    let ui = ctx.ui_context();

    let hebrew_year = match (args.hebrew_year, args.undated) {
        (_, true) => None,
        (Some(year), false) => Some(year),
        (None, false) => Some(service.current_hebrew_year()?),
    };
    // --json wins over a text export
    let format = if ctx.cli().json {
        ExportFormat::Json
    } else {
        args.export_format
    };

    let rendered = service
        .export_calendar(format, hebrew_year, settings.tradition)?
        .render()?;

    let Some(path) = &args.output else {
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
        return Ok(());
    };

    std::fs::write(path, &rendered)
        .map_err(|e| anyhow::anyhow!("Failed to write export {}: {}", path.display(), e))?;
    info!(path = %path.display(), %format, "calendar exported");

    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "path": path.to_string_lossy(),
            "format": format,
            "hebrew_year": hebrew_year,
        }));
    }
    if ctx.quiet() {
        return Ok(());
    }
    let year = hebrew_year.map_or_else(|| "undated".to_string(), |year| year.to_string());
    let path_text = path.display().to_string();
    let format_text = format.to_string();
    print(
        &ui,
        &receipt(
            &ui,
            "Exported calendar",
            &[
                ("Path", path_text.as_str()),
                ("Format", format_text.as_str()),
                ("Hebrew year", year.as_str()),
            ],
        ),
    );
    Ok(())
}
