//! Simulated boot sequence. Presentation only: nothing waits on it but the log.

use tracing::info;

use crate::render::{markup, Surface};
use crate::theme::Theme;

/// Logs each boot line of the theme, pausing `line_delay` between lines.
pub async fn run_boot_sequence(theme: &Theme) {
    let delay = theme.boot.line_delay;
    for (index, line) in theme.boot.lines.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        info!(target: "folio::boot", "{line}");
    }
}

/// Writes the boot screen into the loading-screen container, if the page has one.
pub fn render_boot_screen<S: Surface>(surface: &mut S, theme: &Theme) -> bool {
    surface.replace_children(
        theme.targets.boot_screen,
        &markup::boot_screen(theme).into_string(),
    )
}

/// Empties the loading-screen container once the page has settled.
pub fn clear_boot_screen<S: Surface>(surface: &mut S, theme: &Theme) -> bool {
    surface.replace_children(theme.targets.boot_screen, "")
}
