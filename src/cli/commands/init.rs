use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test)?;
    messages::success("Configuration initialized.");
    Ok(())
}
