//! Pre-cool slot booking options

use serde::{Deserialize, Serialize};

/// Pre-cool SOP targets shown beside the booking form
pub const PRE_COOL_SOP: &str = "3.2°C, 90% RH, 45 min dwell";

/// Trucks ahead in the live queue (display constant)
pub const QUEUE_TRUCKS_AHEAD: u32 = 2;

/// Penalty-free cancellation window before the slot, in minutes
pub const CANCEL_WINDOW_MINUTES: u32 = 60;

/// Packhouses offering pre-cool slots
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Packhouse {
    #[default]
    NashikA,
    NashikB,
    PuneNorth,
}

impl Packhouse {
    pub const ALL: [Packhouse; 3] = [Packhouse::NashikA, Packhouse::NashikB, Packhouse::PuneNorth];
}

impl std::fmt::Display for Packhouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Packhouse::NashikA => write!(f, "Nashik Packhouse A"),
            Packhouse::NashikB => write!(f, "Nashik Packhouse B"),
            Packhouse::PuneNorth => write!(f, "Pune Packhouse North"),
        }
    }
}

/// Bookable pre-cool slot windows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlotWindow {
    #[default]
    TodayEvening,
    TodayLate,
    TomorrowMorning,
}

impl SlotWindow {
    pub const ALL: [SlotWindow; 3] = [
        SlotWindow::TodayEvening,
        SlotWindow::TodayLate,
        SlotWindow::TomorrowMorning,
    ];
}

impl std::fmt::Display for SlotWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotWindow::TodayEvening => write!(f, "Today 6–8 PM"),
            SlotWindow::TodayLate => write!(f, "Today 8–10 PM"),
            SlotWindow::TomorrowMorning => write!(f, "Tomorrow 6–8 AM"),
        }
    }
}
