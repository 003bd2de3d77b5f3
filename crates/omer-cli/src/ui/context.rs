//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// # Arguments
    /// * `json_flag` - Whether `--json` was passed
    /// * `plain_flag` - Whether `--plain` was passed
    /// * `no_color_flag` - Whether `--no-color` was passed
    /// * `ascii_flag` - Whether `--ascii` was passed
    pub fn from_env(
        json_flag: bool,
        plain_flag: bool,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Color is off for NO_COLOR, --no-color, TERM=dumb and pipes
        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb;
        let unicode = !ascii_flag;
        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::resolve(json_flag, plain_flag, is_tty, term_is_dumb);

        Self {
            color,
            unicode,
            width,
            mode,
        }
    }
}

/// Get terminal width, falling back to 80.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
