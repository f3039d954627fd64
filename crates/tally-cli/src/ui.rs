//! Terminal facts the renderers need: whether tables get bold headers and
//! totals, and how many columns tables and report charts may fill.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored.
const MIN_TERM_WIDTH: usize = 40;

/// Label gap, space before the value, and room for a five-digit value.
const CHART_VALUE_ROOM: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Terminal {
    pub bold_tables: bool,
    pub width: Option<usize>,
}

static TERMINAL: OnceLock<Terminal> = OnceLock::new();

impl Terminal {
    /// Decide styling from the flags, the stdout tty state, and the
    /// `NO_COLOR` / `COLUMNS` variables looked up through `var`.
    pub fn detect(flags: &GlobalFlags, is_tty: bool, var: impl Fn(&str) -> Option<String>) -> Self {
        let tables = flags.format == OutputFormat::Table;
        let bold_tables = match flags.color {
            ColorMode::Always => tables,
            ColorMode::Never => false,
            ColorMode::Auto => tables && is_tty && !flags.quiet && var("NO_COLOR").is_none(),
        };
        let width = var("COLUMNS")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);

        Self { bold_tables, width }
    }

    /// Bar width for a report chart whose longest label is `label_width`
    /// chars, shrunk from `configured` so each line fits the terminal.
    #[must_use]
    pub fn chart_width(self, configured: usize, label_width: usize) -> usize {
        self.width.map_or(configured, |columns| {
            let room = columns.saturating_sub(label_width + CHART_VALUE_ROOM);
            configured.min(room).max(1)
        })
    }
}

/// Record the process-wide terminal settings. Later calls are ignored.
pub fn init(flags: &GlobalFlags) {
    let detected = Terminal::detect(flags, std::io::stdout().is_terminal(), |name| {
        std::env::var(name).ok()
    });
    let _ = TERMINAL.set(detected);
}

/// The recorded settings, or plain output when [`init`] never ran.
#[must_use]
pub fn terminal() -> Terminal {
    TERMINAL.get().copied().unwrap_or_default()
}
