//! Query matching
//!
//! Answers "does this venue have an active promotion at day D / time T?"
//! over a venue's full week. The active day and current time are always
//! explicit parameters; there is no ambient "current filter" state.

use crate::core::data::{Day, Venue};
use crate::core::schedule::{CLOSING_TIME, DaySchedule};

/// "Until close" entries match from here on: 6:00 PM. Together with
/// [`CLOSING_TIME`] this approximates the past-midnight wrap without
/// constructing a wrap-around window; swap both constants for a real wrap
/// window here without touching the rest of the matcher.
pub const CLOSE_MATCH_FROM: u16 = 1080;

/// True iff the day's schedule normalizes to anything other than no
/// promotion.
pub fn matches_day_only(venue: &Venue, day: Day) -> bool {
    venue.happy_hours.normalized(day).is_promotion()
}

/// True iff the venue has a promotion covering `minute` on the given day,
/// or on any day when `day` is `None`.
///
/// All-day entries only match day-scoped queries; an unscoped query skips
/// them so a single "All Day" row cannot match every search.
pub fn matches_at_time(venue: &Venue, day: Option<Day>, minute: u16) -> bool {
    let candidates: &[Day] = match &day {
        Some(d) => std::slice::from_ref(d),
        None => &Day::ALL,
    };

    for candidate in candidates {
        match venue.happy_hours.normalized(*candidate) {
            DaySchedule::NoPromotion => {}
            DaySchedule::AllDay => {
                if day.is_some() {
                    return true;
                }
            }
            DaySchedule::OpenUntilClose { .. } => {
                if minute >= CLOSE_MATCH_FROM || minute <= CLOSING_TIME {
                    return true;
                }
            }
            DaySchedule::Windows(windows) => {
                if windows.iter().any(|w| w.contains(minute)) {
                    return true;
                }
            }
        }
    }

    false
}

/// Convenience query for "happy hour right now": checks the current day
/// only, never the rest of the week. The caller supplies the clock.
pub fn matches_now(venue: &Venue, current_day: Day, current_minute: u16) -> bool {
    matches_at_time(venue, Some(current_day), current_minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{Venue, WeeklySchedule};

    fn venue_with(day: Day, raw: &str) -> Venue {
        let mut happy_hours = WeeklySchedule::default();
        happy_hours.set(day, raw.to_string());
        Venue {
            name: "Test Venue".to_string(),
            address: String::new(),
            neighborhood: String::new(),
            phone: String::new(),
            website: String::new(),
            price_range: String::new(),
            happy_hours,
            food_deals: String::new(),
            drink_deals: String::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn no_promotion_never_matches() {
        for raw in ["", "N/A", "n/a", "No HH", "Closed"] {
            let venue = venue_with(Day::Monday, raw);
            assert!(!matches_day_only(&venue, Day::Monday), "{:?}", raw);
            for minute in [0, 720, 1080, 1439] {
                assert!(!matches_at_time(&venue, Some(Day::Monday), minute));
                assert!(!matches_at_time(&venue, None, minute));
            }
        }
    }

    #[test]
    fn window_endpoints_are_inclusive() {
        let venue = venue_with(Day::Friday, "3:00 PM - 6:00 PM");
        assert!(matches_at_time(&venue, Some(Day::Friday), 900));
        assert!(matches_at_time(&venue, Some(Day::Friday), 990));
        assert!(matches_at_time(&venue, Some(Day::Friday), 1080));
        assert!(!matches_at_time(&venue, Some(Day::Friday), 899));
        assert!(!matches_at_time(&venue, Some(Day::Friday), 1081));
    }

    #[test]
    fn gap_between_split_windows_does_not_match() {
        let venue = venue_with(Day::Wednesday, "11am - 2pm, 5pm - 7pm");
        assert!(matches_at_time(&venue, Some(Day::Wednesday), 660));
        assert!(matches_at_time(&venue, Some(Day::Wednesday), 840));
        assert!(matches_at_time(&venue, Some(Day::Wednesday), 1020));
        assert!(matches_at_time(&venue, Some(Day::Wednesday), 1140));
        // 3:30 PM falls in the gap.
        assert!(!matches_at_time(&venue, Some(Day::Wednesday), 930));
    }

    #[test]
    fn until_close_matches_evening_and_late_night() {
        let venue = venue_with(Day::Thursday, "6pm-Close");
        assert!(matches_at_time(&venue, Some(Day::Thursday), 1380)); // 11 PM
        assert!(matches_at_time(&venue, Some(Day::Thursday), 60)); // 1 AM
        assert!(matches_at_time(&venue, Some(Day::Thursday), 120)); // 2 AM cutoff
        assert!(!matches_at_time(&venue, Some(Day::Thursday), 900)); // 3 PM
        assert!(!matches_at_time(&venue, Some(Day::Thursday), 121));
    }

    // Deliberate asymmetry: "All Day" entries count only when the query
    // names a day. Changing this should be a conscious decision.
    #[test]
    fn all_day_counts_only_with_specific_day() {
        let venue = venue_with(Day::Saturday, "All Day");
        for minute in [0, 600, 1439] {
            assert!(matches_at_time(&venue, Some(Day::Saturday), minute));
            assert!(!matches_at_time(&venue, None, minute));
        }
        assert!(matches_day_only(&venue, Day::Saturday));
    }

    #[test]
    fn malformed_schedule_is_treated_as_no_promotion() {
        let venue = venue_with(Day::Monday, "3 to 6pm");
        assert!(!matches_day_only(&venue, Day::Monday));
        assert!(!matches_at_time(&venue, Some(Day::Monday), 960));
        assert!(!matches_at_time(&venue, None, 960));
    }

    #[test]
    fn unscoped_query_scans_all_days() {
        let venue = venue_with(Day::Sunday, "4pm - 6pm");
        assert!(matches_at_time(&venue, None, 1020));
        assert!(!matches_at_time(&venue, Some(Day::Monday), 1020));
    }

    #[test]
    fn matches_now_never_scans_other_days() {
        let venue = venue_with(Day::Tuesday, "4pm - 6pm");
        assert!(matches_now(&venue, Day::Tuesday, 1020));
        assert!(!matches_now(&venue, Day::Monday, 1020));
    }
}
