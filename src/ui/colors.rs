use crossterm::style::{Color, Stylize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether painted output carries ANSI color codes. Disabled by `--plain`
/// for terminals without color support or for plain text capture.
static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

pub fn set_colors_enabled(enabled: bool) {
    COLORS_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

// Color accessors for the terminal output palette
pub fn header_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn info_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn data_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn warning_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// Apply a foreground color to a string for terminal display. Returns the
/// text unstyled when colors are disabled.
pub fn paint(text: &str, color: Color) -> String {
    if colors_enabled() {
        text.to_string().with(color).to_string()
    } else {
        text.to_string()
    }
}
