use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use omer_core::{DateDisplay, ExportFormat, OutputFormat, Tradition, VERSION};

/// Omer - Sefirat HaOmer calculator: counting texts, dates and Sefirot
#[derive(Parser)]
#[command(name = "omer")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Liturgical tradition (sefardi, ashkenazi, chassidic)
    #[arg(short, long, global = true, env = "OMER_TRADITION")]
    pub tradition: Option<Tradition>,

    /// Counting text to show (hebrew, transliterated, both, english)
    #[arg(short, long, global = true, env = "OMER_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Date labels to show (hebrew, gregorian, both, iso)
    #[arg(long, global = true, env = "OMER_DATE_FORMAT", value_name = "DISPLAY")]
    pub dates: Option<DateDisplay>,

    /// Append the English translation to the counting text
    #[arg(long, global = true)]
    pub english: bool,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Plain output, even on a terminal
    #[arg(long, global = true)]
    pub plain: bool,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// What to count today
    Today(TodayArgs),

    /// Summary of today's position in the count
    Status(StatusArgs),

    /// Show one day of the count
    Day(DayArgs),

    /// Show one week of the count
    Week(WeekArgs),

    /// Omer days between two Gregorian dates
    Range(RangeArgs),

    /// Special days within the count
    Special,

    /// Export the whole calendar
    Export(ExportArgs),

    /// The seven Sefirot
    Sefirot,

    /// The Ana BeKoach prayer
    AnaBekoach,

    /// Look up a Hebrew date
    HebrewDate(HebrewDateArgs),

    /// Look up a Gregorian date
    GregorianDate(GregorianDateArgs),

    /// Check the built-in tables for missing entries
    Validate,

    /// Manage the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `today` command
#[derive(Args)]
pub struct TodayArgs {
    /// Include the blessing
    #[arg(long)]
    pub blessing: bool,

    /// Include the closing prayer
    #[arg(long)]
    pub prayer: bool,

    /// Include the Sefirah meditation
    #[arg(long)]
    pub sefirah: bool,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `status` command
#[derive(Args)]
pub struct StatusArgs {
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `day` command
#[derive(Args)]
pub struct DayArgs {
    /// Day of the count (1-49)
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub number: i64,

    /// Include the blessing
    #[arg(long)]
    pub blessing: bool,
}

/// Arguments for the `week` command
#[derive(Args)]
pub struct WeekArgs {
    /// Week of the count (1-7)
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub number: i64,

    /// Hebrew year to date the week's days for
    #[arg(long, value_name = "YEAR")]
    pub hebrew_year: Option<i32>,

    /// One line per day
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `range` command
#[derive(Args)]
pub struct RangeArgs {
    /// First Gregorian date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: NaiveDate,

    /// Last Gregorian date, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: NaiveDate,

    /// One line per day
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Export format (json, text)
    #[arg(
        long = "export-format",
        visible_alias = "as",
        value_name = "FORMAT",
        default_value_t = ExportFormat::Json
    )]
    pub export_format: ExportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Hebrew year to date the calendar for (default: the current year)
    #[arg(long, value_name = "YEAR", conflicts_with = "undated")]
    pub hebrew_year: Option<i32>,

    /// Leave Gregorian dates out
    #[arg(long)]
    pub undated: bool,
}

/// Arguments for the `hebrew-date` command
#[derive(Args)]
pub struct HebrewDateArgs {
    /// Day of the Hebrew month
    #[arg(value_name = "DAY")]
    pub day: u32,

    /// Hebrew month name (Nisan, Iyyar, Sivan)
    #[arg(value_name = "MONTH")]
    pub month: String,
}

/// Arguments for the `gregorian-date` command
#[derive(Args)]
pub struct GregorianDateArgs {
    /// Gregorian date (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: NaiveDate,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show effective settings
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init(ConfigInitArgs),
}

/// Arguments for the `config init` command
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
