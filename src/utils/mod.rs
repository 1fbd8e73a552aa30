pub mod colors;
pub mod formatting;
pub mod table;
pub mod time;

pub use formatting::format_currency;
pub use time::parse_clock;
