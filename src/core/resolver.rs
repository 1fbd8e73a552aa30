//! Sales window resolver: classifies a wall-clock time into one of the
//! four report windows and computes the countdown to the next one.
//!
//! Pure functions of their `ClockTime` input and the static schedule in
//! `models::window`; no I/O, no shared state. Callers that want a live
//! view re-invoke these once per minute.

use crate::models::{ClockTime, NextWindow, WindowId};
use crate::utils::time::time_until;

/// Which window is open at `now`, if any.
///
/// The intervals are disjoint by construction, so exactly one branch can
/// fire for any hour: 15-16 → 3pm, 19-20 → 7pm, 21-22 → 9pm, and the
/// closing window covers 22:00-06:00 across midnight.
pub fn current_window(now: ClockTime) -> Option<WindowId> {
    let h = now.hour();

    if (15..16).contains(&h) {
        return Some(WindowId::ThreePm);
    }
    if (19..20).contains(&h) {
        return Some(WindowId::SevenPm);
    }
    if (21..22).contains(&h) {
        return Some(WindowId::NinePm);
    }
    if h >= 22 || h < 6 {
        return Some(WindowId::Closing);
    }

    None
}

/// Which window opens next, with opening label and countdown.
///
/// Only meaningful from a closed state: while any window is open
/// (including closing) this returns `None`, and the display layer is
/// expected to say "open now" instead.
pub fn next_window(now: ClockTime) -> Option<NextWindow> {
    if current_window(now).is_some() {
        return None;
    }

    let h = now.hour();

    // The gaps between windows. 0-6 belongs to closing and is already
    // handled above.
    if h < 15 {
        return Some(NextWindow {
            window: WindowId::ThreePm,
            opens_at: "3:00 PM",
            opens_in: time_until(15, now),
        });
    }
    if (16..19).contains(&h) {
        return Some(NextWindow {
            window: WindowId::SevenPm,
            opens_at: "7:00 PM",
            opens_in: time_until(19, now),
        });
    }
    if (20..21).contains(&h) {
        return Some(NextWindow {
            window: WindowId::NinePm,
            opens_at: "9:00 PM",
            opens_in: time_until(21, now),
        });
    }

    None
}

/// True iff `id` is the window open at `now`.
pub fn is_window_open(id: WindowId, now: ClockTime) -> bool {
    current_window(now) == Some(id)
}
