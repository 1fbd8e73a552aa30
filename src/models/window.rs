use serde::Serialize;

/// Identifier of one of the four daily sales report windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindowId {
    #[serde(rename = "3pm")]
    ThreePm,
    #[serde(rename = "7pm")]
    SevenPm,
    #[serde(rename = "9pm")]
    NinePm,
    #[serde(rename = "closing")]
    Closing,
}

impl WindowId {
    pub fn code(&self) -> &'static str {
        match self {
            WindowId::ThreePm => "3pm",
            WindowId::SevenPm => "7pm",
            WindowId::NinePm => "9pm",
            WindowId::Closing => "closing",
        }
    }

    /// Helper: convert input code from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "3pm" => Some(WindowId::ThreePm),
            "7pm" => Some(WindowId::SevenPm),
            "9pm" => Some(WindowId::NinePm),
            "closing" => Some(WindowId::Closing),
            _ => None,
        }
    }

    /// Static configuration record for this window.
    pub fn config(&self) -> &'static SalesWindow {
        // SALES_WINDOWS covers every variant, so the lookup always hits.
        SALES_WINDOWS
            .iter()
            .find(|w| w.id == *self)
            .unwrap_or(&SALES_WINDOWS[0])
    }

    pub fn label(&self) -> &'static str {
        self.config().label
    }

    pub fn start_hour(&self) -> u32 {
        self.config().start_hour
    }
}

/// One row of the fixed report-window schedule.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SalesWindow {
    pub id: WindowId,
    pub label: &'static str,
    pub display_range: &'static str,
    pub start_hour: u32,
}

/// The four daily report windows, ordered by start hour.
/// 3pm/7pm/9pm are one hour wide; closing runs 22:00-06:00 and wraps
/// past midnight. Read-only for the process lifetime.
pub static SALES_WINDOWS: [SalesWindow; 4] = [
    SalesWindow {
        id: WindowId::ThreePm,
        label: "3 PM Report",
        display_range: "3:00 PM - 4:00 PM",
        start_hour: 15,
    },
    SalesWindow {
        id: WindowId::SevenPm,
        label: "7 PM Report",
        display_range: "7:00 PM - 8:00 PM",
        start_hour: 19,
    },
    SalesWindow {
        id: WindowId::NinePm,
        label: "9 PM Report",
        display_range: "9:00 PM - 10:00 PM",
        start_hour: 21,
    },
    SalesWindow {
        id: WindowId::Closing,
        label: "Closing Report",
        display_range: "10:00 PM onwards",
        start_hour: 22,
    },
];

/// Result of the next-window query: which window opens next, the
/// human-readable opening time, and a formatted countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextWindow {
    pub window: WindowId,
    pub opens_at: &'static str,
    pub opens_in: String,
}
