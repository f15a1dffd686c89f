//! Schedule normalization
//!
//! Happy hour schedules come straight out of a shared spreadsheet and are
//! typed by hand, so one day's cell can be anything: `"3:00 PM - 6:00 PM"`,
//! `"11am - 2pm, 5pm - 7pm"`, `"6pm-Close"`, `"All Day"`, `"N/A"`, or noise.
//! This module turns one such string into a [`DaySchedule`] classification
//! with zero or more inclusive minute-of-day windows.
//!
//! Dirty input never errors: a cell that cannot be understood degrades to
//! [`DaySchedule::NoPromotion`] so one bad row never breaks matching for the
//! rest of the dataset.

use regex::Regex;
use std::sync::OnceLock;

/// Last valid minute of the day (23:59).
pub const LAST_MINUTE: u16 = 1439;

/// Assumed closing time for "until close" entries: 02:00 the next day.
pub const CLOSING_TIME: u16 = 120;

/// An inclusive promotion window in minutes since midnight.
///
/// Constructed only by the normalizer; `start <= end` always holds and no
/// window crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: u16,
    pub end: u16,
}

impl TimeWindow {
    /// Inclusive containment on both endpoints.
    pub fn contains(&self, minute: u16) -> bool {
        self.start <= minute && minute <= self.end
    }
}

/// Classification of one day's raw schedule string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaySchedule {
    /// Blank cell, an explicit "n/a" / "no hh" / "closed" marker, or a cell
    /// where every range segment was malformed.
    NoPromotion,
    /// The promotion runs all day. Only honored by day-scoped queries; an
    /// unscoped query ignores these so one venue cannot dominate every
    /// search.
    AllDay,
    /// A `"6pm-Close"` style entry. The parsed start is kept for display and
    /// for callers that need exact boundaries; matching uses the fixed
    /// evening heuristic in [`crate::core::matcher`].
    OpenUntilClose { start: Option<u16> },
    /// One or more explicit windows, never empty.
    Windows(Vec<TimeWindow>),
}

impl DaySchedule {
    /// Explicit windows for this classification, with `AllDay` expanded to
    /// the full-day window. `OpenUntilClose` has no closed-form window and
    /// yields nothing; callers needing its boundaries must special-case it.
    pub fn windows(&self) -> Vec<TimeWindow> {
        match self {
            DaySchedule::Windows(windows) => windows.clone(),
            DaySchedule::AllDay => vec![TimeWindow {
                start: 0,
                end: LAST_MINUTE,
            }],
            _ => Vec::new(),
        }
    }

    /// True for anything other than [`DaySchedule::NoPromotion`].
    pub fn is_promotion(&self) -> bool {
        !matches!(self, DaySchedule::NoPromotion)
    }
}

/// Markers that mean "no happy hour today", matched case-insensitively as
/// substrings.
const NO_PROMOTION_MARKERS: [&str; 3] = ["n/a", "no hh", "closed"];

fn time_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s*$").unwrap())
}

/// Parse a single time token like `"3:00 PM"`, `"11am"`, `"14:00"` or `"11"`
/// into minutes since midnight.
///
/// With a meridiem marker the hour must be 1-12 (12am is midnight, 12pm is
/// noon); without one the hour is taken as 24-hour (0-23). The minute
/// defaults to 0. Returns `None` for anything else.
pub fn parse_time_token(token: &str) -> Option<u16> {
    let caps = time_token_re().captures(token)?;
    let hour: u16 = caps[1].parse().ok()?;
    let minute: u16 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if minute > 59 {
        return None;
    }

    let hour = match caps.get(3) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            let pm = meridiem.as_str().eq_ignore_ascii_case("pm");
            match (hour, pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            }
        }
        None => {
            if hour > 23 {
                return None;
            }
            hour
        }
    };

    Some(hour * 60 + minute)
}

/// Normalize one raw day string into a [`DaySchedule`].
pub fn normalize(raw: &str) -> DaySchedule {
    normalize_verbose(raw).0
}

/// Like [`normalize`], but also returns the range segments that had to be
/// dropped, so callers can surface dirty spreadsheet cells without changing
/// any matching behavior.
pub fn normalize_verbose(raw: &str) -> (DaySchedule, Vec<String>) {
    let text = raw.trim();
    if text.is_empty() {
        return (DaySchedule::NoPromotion, Vec::new());
    }

    let lower = text.to_lowercase();
    if NO_PROMOTION_MARKERS.iter().any(|m| lower.contains(m)) {
        return (DaySchedule::NoPromotion, Vec::new());
    }
    if lower.contains("all day") {
        return (DaySchedule::AllDay, Vec::new());
    }
    if lower.contains("close") {
        let start = text.split(['-', '–']).next().and_then(parse_time_token);
        return (DaySchedule::OpenUntilClose { start }, Vec::new());
    }

    // Comma/semicolon separated disjoint windows, e.g. "11am - 2pm, 5pm - 7pm".
    let mut windows = Vec::new();
    let mut dropped = Vec::new();
    for segment in text.split([',', ';']) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        match parse_range(segment) {
            Some(window) => windows.push(window),
            None => dropped.push(segment.to_string()),
        }
    }

    if windows.is_empty() {
        (DaySchedule::NoPromotion, dropped)
    } else {
        (DaySchedule::Windows(windows), dropped)
    }
}

/// Parse one `<time> - <time>` segment (hyphen or en dash). Inverted ranges
/// would cross midnight, which explicit windows never do, so they are
/// rejected like any other malformed segment.
fn parse_range(segment: &str) -> Option<TimeWindow> {
    let (start, end) = segment.split_once(['-', '–'])?;
    let start = parse_time_token(start)?;
    let end = parse_time_token(end)?;
    if start > end {
        return None;
    }
    Some(TimeWindow { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_twelve_hour_tokens() {
        assert_eq!(parse_time_token("3:00 PM"), Some(900));
        assert_eq!(parse_time_token("11am"), Some(660));
        assert_eq!(parse_time_token("12am"), Some(0));
        assert_eq!(parse_time_token("12pm"), Some(720));
        assert_eq!(parse_time_token("12:30 AM"), Some(30));
        assert_eq!(parse_time_token(" 5 pm "), Some(1020));
    }

    #[test]
    fn parses_twenty_four_hour_tokens() {
        assert_eq!(parse_time_token("14:00"), Some(840));
        assert_eq!(parse_time_token("0:15"), Some(15));
        assert_eq!(parse_time_token("11"), Some(660));
        assert_eq!(parse_time_token("23:59"), Some(1439));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(parse_time_token("25:00"), None);
        assert_eq!(parse_time_token("13pm"), None);
        assert_eq!(parse_time_token("0pm"), None);
        assert_eq!(parse_time_token("3:75"), None);
        assert_eq!(parse_time_token("noonish"), None);
        assert_eq!(parse_time_token(""), None);
    }

    #[test]
    fn blank_and_markers_are_no_promotion() {
        assert_eq!(normalize(""), DaySchedule::NoPromotion);
        assert_eq!(normalize("   "), DaySchedule::NoPromotion);
        assert_eq!(normalize("N/A"), DaySchedule::NoPromotion);
        assert_eq!(normalize("n/a"), DaySchedule::NoPromotion);
        assert_eq!(normalize("No HH"), DaySchedule::NoPromotion);
        assert_eq!(normalize("Closed"), DaySchedule::NoPromotion);
    }

    #[test]
    fn all_day_classifies() {
        assert_eq!(normalize("All Day"), DaySchedule::AllDay);
        assert_eq!(normalize("all day long"), DaySchedule::AllDay);
        assert_eq!(
            normalize("All Day").windows(),
            vec![TimeWindow { start: 0, end: 1439 }]
        );
    }

    #[test]
    fn open_until_close_keeps_parsed_start() {
        assert_eq!(
            normalize("6pm-Close"),
            DaySchedule::OpenUntilClose { start: Some(1080) }
        );
        assert_eq!(
            normalize("9:30 PM - Close"),
            DaySchedule::OpenUntilClose { start: Some(1290) }
        );
        assert_eq!(
            normalize("Open until close"),
            DaySchedule::OpenUntilClose { start: None }
        );
    }

    #[test]
    fn single_window_normalizes() {
        assert_eq!(
            normalize("3:00 PM - 6:00 PM"),
            DaySchedule::Windows(vec![TimeWindow { start: 900, end: 1080 }])
        );
    }

    #[test]
    fn multiple_windows_split_on_commas() {
        assert_eq!(
            normalize("11am - 2pm, 5pm - 7pm"),
            DaySchedule::Windows(vec![
                TimeWindow { start: 660, end: 840 },
                TimeWindow { start: 1020, end: 1140 },
            ])
        );
    }

    #[test]
    fn en_dash_separator_accepted() {
        assert_eq!(
            normalize("4pm – 6pm"),
            DaySchedule::Windows(vec![TimeWindow { start: 960, end: 1080 }])
        );
    }

    #[test]
    fn malformed_segments_are_dropped_silently() {
        // No recognized separator, zero windows survive.
        assert_eq!(normalize("3 to 6pm"), DaySchedule::NoPromotion);

        // One good segment survives a bad neighbor.
        let (schedule, dropped) = normalize_verbose("3 to 6pm, 9pm - 11pm");
        assert_eq!(
            schedule,
            DaySchedule::Windows(vec![TimeWindow { start: 1260, end: 1380 }])
        );
        assert_eq!(dropped, vec!["3 to 6pm".to_string()]);
    }

    #[test]
    fn inverted_range_is_dropped() {
        let (schedule, dropped) = normalize_verbose("7pm - 5pm");
        assert_eq!(schedule, DaySchedule::NoPromotion);
        assert_eq!(dropped, vec!["7pm - 5pm".to_string()]);
    }

    #[test]
    fn clean_strings_report_no_drops() {
        let (_, dropped) = normalize_verbose("11am - 2pm, 5pm - 7pm");
        assert!(dropped.is_empty());
        let (_, dropped) = normalize_verbose("N/A");
        assert!(dropped.is_empty());
    }
}
