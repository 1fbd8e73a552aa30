use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::resolver;
use crate::errors::AppResult;
use crate::models::ClockTime;
use crate::ui::messages;
use crate::utils::formatting::{format_date, format_time};
use chrono::NaiveTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: ClockTime) -> AppResult<()> {
    if let Commands::Status { json } = cmd {
        let current = resolver::current_window(now);

        if *json {
            let payload = serde_json::json!({
                "at": now.to_string(),
                "active_window": current.map(|w| w.code()),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        let today = chrono::Local::now().date_naive();
        let display_time = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0)
            .map(|t| format_time(t, &cfg.time_format))
            .unwrap_or_else(|| now.to_string());

        messages::info(format!(
            "{} {}",
            format_date(today, &cfg.date_format),
            display_time
        ));

        match current {
            Some(w) => {
                messages::success(format!(
                    "{} is open now ({})",
                    w.label(),
                    w.config().display_range
                ));
            }
            None => {
                messages::warning("No sales window is open right now.");
                messages::info("Run `saleswindow next` to see when the next one starts.");
            }
        }
    }
    Ok(())
}
