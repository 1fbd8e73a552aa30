use crate::cli::parser::Commands;
use crate::core::resolver;
use crate::errors::{AppError, AppResult};
use crate::models::{ClockTime, WindowId};
use crate::ui::messages;

pub fn handle(cmd: &Commands, now: ClockTime) -> AppResult<()> {
    if let Commands::Check { window } = cmd {
        let id = WindowId::from_code(window)
            .ok_or_else(|| AppError::UnknownWindow(window.clone()))?;

        if resolver::is_window_open(id, now) {
            messages::success(format!(
                "{} is open ({})",
                id.label(),
                id.config().display_range
            ));
        } else {
            messages::warning(format!("{} is closed", id.label()));
            if let Some(n) = resolver::next_window(now)
                && n.window == id
            {
                println!("   Opens at {} (in {})", n.opens_at, n.opens_in);
            }
        }
    }
    Ok(())
}
