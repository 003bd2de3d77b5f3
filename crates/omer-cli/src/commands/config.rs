use crate::app::AppContext;
use crate::cli::ConfigInitArgs;
use crate::config::{write_config, OmerFileConfig};
use crate::errors::CliError;
use crate::output::{print_json, settings_json};
use crate::ui::{header_with_context, hint, kv, print, receipt};

pub fn handle_show(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    let exists = path.exists();
    let settings = ctx.settings()?;
    let ui = ctx.ui_context();

    if ui.mode.is_json() {
        return print_json(&settings_json(&path, exists, &settings));
    }

    let path_text = path.display().to_string();
    print(&ui, &header_with_context(&ui, "config", None, Some(&path_text)));
    print(&ui, &kv(&ui, "Tradition", settings.tradition.as_str()));
    print(&ui, &kv(&ui, "Output format", settings.output_format.as_str()));
    print(&ui, &kv(&ui, "Include english", &settings.include_english.to_string()));
    print(&ui, &kv(&ui, "Date display", settings.date_display.as_str()));
    print(&ui, &kv(&ui, "Gregorian format", &settings.gregorian_format));
    print(&ui, &kv(&ui, "Show week info", &settings.show_week_info.to_string()));
    print(
        &ui,
        &kv(&ui, "Show remaining days", &settings.show_remaining_days.to_string()),
    );
    print(&ui, &kv(&ui, "Compact output", &settings.compact_output.to_string()));
    if !exists && !ctx.quiet() {
        print(&ui, &hint(&ui, "No config file yet. Run `omer config init` to create one."));
    }
    Ok(())
}

pub fn handle_path(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    let ui = ctx.ui_context();
    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "config_path": path.to_string_lossy(),
            "config_exists": path.exists(),
        }));
    }
    println!("{}", path.display());
    Ok(())
}

pub fn handle_init(ctx: &AppContext, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    if path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            path.display()
        ))
        .into());
    }

    write_config(&path, &OmerFileConfig::default())?;

    let ui = ctx.ui_context();
    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "config_path": path.to_string_lossy(),
            "written": true,
        }));
    }
    if !ctx.quiet() {
        let path_text = path.display().to_string();
        print(&ui, &receipt(&ui, "Wrote config", &[("Path", path_text.as_str())]));
    }
    Ok(())
}
