use clap::{Parser, Subcommand};

/// Command-line interface definition for saleswindow
/// CLI application to track retail sales report windows
#[derive(Parser)]
#[command(
    name = "saleswindow",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple sales-window CLI: see which report window is open and when the next one starts",
    long_about = None
)]
pub struct Cli {
    /// Evaluate at the given wall-clock time instead of now (useful for tests)
    #[arg(global = true, long = "at", value_name = "HH:MM")]
    pub at: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Show the currently open sales window
    Status {
        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Show the next sales window and the countdown to it
    Next {
        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Check whether a specific window is open
    Check {
        /// Window id: 3pm, 7pm, 9pm or closing
        window: String,
    },

    /// Print the full report-window schedule
    Schedule {
        #[arg(long = "json", help = "Print the schedule as JSON")]
        json: bool,
    },
}
