//! Output mode routing logic.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and tables (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything (exclusive mode)
    /// 2. `--plain` forces plain
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty only when stdout is TTY
    pub fn resolve(json_flag: bool, plain_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        if json_flag {
            return Self::Json;
        }
        if plain_flag || term_is_dumb {
            return Self::Plain;
        }
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
