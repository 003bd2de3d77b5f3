//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::format::truncate_left;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge, TITLE_SEPARATOR};

/// Longest path shown in a header before it is shortened.
const MAX_PATH_LEN: usize = 50;

/// Render a header line for a command.
///
/// Pretty mode: "Omer · command (context)" with optional path
/// Plain mode: "omer command"
pub fn header_with_context(
    ctx: &UiContext,
    command: &str,
    context: Option<&str>,
    path: Option<&str>,
) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Omer", styles::bold(), ctx.color);
            let separator = TITLE_SEPARATOR.get(ctx.unicode);
            let mut out = match context {
                Some(c) => format!("{} {} {} ({})", title, separator, command, c),
                None => format!("{} {} {}", title, separator, command),
            };
            if let Some(p) = path {
                out.push_str(&format!("\n{}", kv(ctx, "Path", &truncate_left(p, MAX_PATH_LEN))));
            }
            out
        }
        OutputMode::Plain => format!("omer {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a header line for a command (simple version).
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    header_with_context(ctx, command, context, None)
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() && ctx.unicode {
        "\u{2500}".repeat(ctx.width.min(60))
    } else if ctx.mode.is_pretty() {
        "-".repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }
    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

fn plain_rows(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a bordered table.
///
/// Pretty mode: Styled table with borders
/// Plain mode: Space-separated values (no header)
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }
    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);

    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    table.set_header(headers);
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Render a borderless table (for day listings).
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }
    let mut table = ComfyTable::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Dim headers through comfy-table so column widths stay correct
    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let mut cell = Cell::new(c.header);
            if ctx.color {
                cell = cell.add_attribute(Attribute::Dim);
            }
            cell
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..columns.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }
    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "day", Some("33"));
        assert_eq!(h, "Omer \u{00B7} day (33)");
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "week", Some("5")), "omer week");
    }

    #[test]
    fn test_header_json_is_empty() {
        let ctx = UiContext {
            mode: OutputMode::Json,
            ..plain_ctx()
        };
        assert!(header(&ctx, "day", None).is_empty());
    }

    #[test]
    fn test_header_shortens_long_path() {
        let long_path = "/a/very/long/path/that/exceeds/fifty/characters/omer/config.toml";
        let h = header_with_context(&pretty_ctx(), "config", None, Some(long_path));
        assert!(h.contains("Path: ..."));
        assert!(h.ends_with("omer/config.toml"));
    }

    #[test]
    fn test_badge_ok() {
        let b = badge(&plain_ctx(), Badge::Ok, "Done");
        assert_eq!(b, "[OK] Done");
    }

    #[test]
    fn test_kv_pretty() {
        assert_eq!(kv(&pretty_ctx(), "Hebrew date", "18 Iyyar"), "Hebrew date: 18 Iyyar");
    }

    #[test]
    fn test_kv_plain() {
        assert_eq!(kv(&plain_ctx(), "Hebrew date", "18 Iyyar"), "hebrew_date=18 Iyyar");
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain_ctx(), "try this"), "hint=try this");
    }

    #[test]
    fn test_receipt_plain() {
        let r = receipt(&plain_ctx(), "Wrote config", &[("Path", "/tmp/c.toml")]);
        assert_eq!(r, "status=ok\npath=/tmp/c.toml");
    }

    #[test]
    fn test_receipt_pretty() {
        let r = receipt(&pretty_ctx(), "Wrote config", &[("Path", "/tmp/c.toml")]);
        assert!(r.starts_with("[\u{2713}] Wrote config"));
        assert!(r.contains("  Path: /tmp/c.toml"));
    }

    #[test]
    fn test_table_plain() {
        let columns = [Column::new("Day"), Column::new("Date")];
        let rows = vec![vec!["33".to_string(), "18 Iyyar".to_string()]];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "33 18 Iyyar");
    }

    #[test]
    fn test_table_pretty() {
        let columns = [Column::new("Day"), Column::new("Sefirah")];
        let rows = vec![
            vec!["1".to_string(), "Chesed sheb'Chesed".to_string()],
            vec!["33".to_string(), "Hod sheb'Hod".to_string()],
        ];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Day"));
        assert!(t.contains("Sefirah"));
        assert!(t.contains("Hod sheb'Hod"));
    }

    #[test]
    fn test_table_empty_rows_keeps_headers() {
        let columns = [Column::new("Day"), Column::new("Name")];
        let t = table(&pretty_ctx(), &columns, &[]);
        assert!(t.contains("Day"));
        assert!(t.contains("Name"));
    }

    #[test]
    fn test_simple_table_plain_has_no_header() {
        let columns = [Column::new("Day"), Column::new("Date")];
        let rows = vec![
            vec!["1".to_string(), "16 Nisan".to_string()],
            vec!["2".to_string(), "17 Nisan".to_string()],
        ];
        let t = simple_table(&plain_ctx(), &columns, &rows);
        let lines: Vec<&str> = t.lines().collect();
        assert_eq!(lines, vec!["1 16 Nisan", "2 17 Nisan"]);
    }

    #[test]
    fn test_simple_table_pretty_has_header() {
        let columns = [Column::new("Day"), Column::new("Date")];
        let rows = vec![vec!["1".to_string(), "16 Nisan".to_string()]];
        let t = simple_table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Day"));
        assert!(t.contains("16 Nisan"));
    }

    #[test]
    fn test_divider() {
        assert!(divider(&pretty_ctx()).contains('\u{2500}'));
        assert_eq!(divider(&plain_ctx()), "---");
    }

    #[test]
    fn test_error_message() {
        let e = error_message(&pretty_ctx(), "Omer day must be between 1 and 49", Some("Try 33"));
        assert!(e.contains("[\u{2717}]"));
        assert!(e.contains("Hint: Try 33"));

        let e_plain = error_message(&plain_ctx(), "bad", Some("Try 33"));
        assert_eq!(e_plain, "error=bad\nhint=Try 33");
    }
}
