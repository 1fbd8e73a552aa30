use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::resolver;
use crate::errors::AppResult;
use crate::models::{ClockTime, SALES_WINDOWS};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, now: ClockTime) -> AppResult<()> {
    if let Commands::Schedule { json } = cmd {
        let current = resolver::current_window(now);

        if *json {
            let payload = serde_json::json!({
                "at": now.to_string(),
                "active_window": current.map(|w| w.code()),
                "windows": SALES_WINDOWS,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("WINDOW", 9),
            Column::new("REPORT", 16),
            Column::new("TIME", 20),
            Column::new("STATUS", 6),
        ]);

        for (i, w) in SALES_WINDOWS.iter().enumerate() {
            let open = current == Some(w.id);
            table.add_row(vec![
                w.id.code().to_string(),
                w.label.to_string(),
                w.display_range.to_string(),
                if open { "open" } else { "closed" }.to_string(),
            ]);
            if open {
                table.highlight_row(i);
            }
        }

        println!("{}", cfg.separator_char.repeat(54));
        print!("{}", table.render());
        println!("{}", cfg.separator_char.repeat(54));
    }
    Ok(())
}
