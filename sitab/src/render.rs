//! Console messages for table outcomes

use console::Style;
use sitablib::WriteOutcome;

/// Styles used for outcome lines
struct Theme {
    ok: Style,
    warn: Style,
    path: Style,
}

impl Theme {
    fn new() -> Self {
        Self {
            ok: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            path: Style::new().bold(),
        }
    }
}

/// One human-readable line describing what happened to the artifact.
pub fn render_outcome(outcome: &WriteOutcome) -> String {
    let theme = Theme::new();
    match outcome {
        WriteOutcome::Written { path } => format!(
            "{} LaTeX code saved in '{}'.",
            theme.ok.apply_to("Saved:"),
            theme.path.apply_to(path.display())
        ),
        WriteOutcome::Skipped {
            path,
            labels,
            columns,
        } => format!(
            "{} Table '{}': {} column captions given for {} columns - no output file produced",
            theme.warn.apply_to("Warning:"),
            theme.path.apply_to(path.display()),
            labels,
            columns
        ),
    }
}
