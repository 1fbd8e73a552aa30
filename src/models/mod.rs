pub mod clock;
pub mod window;

pub use clock::ClockTime;
pub use window::{NextWindow, SALES_WINDOWS, SalesWindow, WindowId};
