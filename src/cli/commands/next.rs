use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::resolver;
use crate::errors::AppResult;
use crate::models::ClockTime;
use crate::ui::messages;

pub fn handle(cmd: &Commands, _cfg: &Config, now: ClockTime) -> AppResult<()> {
    if let Commands::Next { json } = cmd {
        let current = resolver::current_window(now);
        let next = resolver::next_window(now);

        if *json {
            let payload = serde_json::json!({
                "at": now.to_string(),
                "active_window": current.map(|w| w.code()),
                "next": next,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        match next {
            Some(n) => {
                messages::info(format!("Next window: {}", n.window.label()));
                println!("   Opens at: {}", n.opens_at);
                println!("   Opens in: {}", n.opens_in);
            }
            None => {
                // next_window is only None while a window is active.
                if let Some(w) = current {
                    messages::success(format!("{} is open now", w.label()));
                }
            }
        }
    }
    Ok(())
}
