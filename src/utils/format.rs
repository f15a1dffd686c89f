//! Formatting helpers for times, windows and schedule classifications.

use crate::core::schedule::{DaySchedule, TimeWindow};

/// Format minutes since midnight as `h:MM AM/PM`, e.g. 900 -> "3:00 PM".
pub fn format_minute(minute: u16) -> String {
    let hour24 = minute / 60;
    let min = minute % 60;
    let (hour, meridiem) = match hour24 {
        0 => (12, "AM"),
        1..=11 => (hour24, "AM"),
        12 => (12, "PM"),
        _ => (hour24 - 12, "PM"),
    };
    format!("{}:{:02} {}", hour, min, meridiem)
}

pub fn format_window(window: &TimeWindow) -> String {
    format!(
        "{} - {}",
        format_minute(window.start),
        format_minute(window.end)
    )
}

/// Human rendering of a normalized day schedule, used by venue cards and the
/// week view.
pub fn format_day_schedule(schedule: &DaySchedule) -> String {
    match schedule {
        DaySchedule::NoPromotion => "No Happy Hour".to_string(),
        DaySchedule::AllDay => "All Day".to_string(),
        DaySchedule::OpenUntilClose { start: Some(start) } => {
            format!("{} - Close", format_minute(*start))
        }
        DaySchedule::OpenUntilClose { start: None } => "Until Close".to_string(),
        DaySchedule::Windows(windows) => windows
            .iter()
            .map(format_window)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
