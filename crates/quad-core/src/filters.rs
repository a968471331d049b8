//! Filter predicates backing the dashboard's search box, tag chips, and
//! relative-time selector. Predicates are pure; "now" is always an argument
//! so the windows stay deterministic under test.

use chrono::{DateTime, TimeZone, Timelike, Weekday};
use quad_contracts::{Event, Tag};

use crate::dates::{day_end, day_start, local_date, local_datetime, next_weekday};

/// Hour of day (24h, viewer-local) from which an event counts as tonight.
pub const TONIGHT_START_HOUR: u32 = 17;

/// Relative-time window for the dashboard, evaluated against the supplied
/// "now" on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFilter {
    #[default]
    All,
    Today,
    Tonight,
    ThisWeekend,
}

/// Case-insensitive substring match on title or club.
/// An empty query matches everything.
pub fn matches_search(event: &Event, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    event.title.to_lowercase().contains(&query) || event.club.to_lowercase().contains(&query)
}

/// Tag chip match. `None` is the "All" chip; otherwise the event must carry
/// exactly the selected tag.
pub fn matches_tag(event: &Event, selected: Option<Tag>) -> bool {
    match selected {
        None => true,
        Some(tag) => event.tags.iter().any(|t| t == tag.as_str()),
    }
}

/// Relative-time window match, computed in the calendar of `now`'s timezone.
///
/// "This weekend" runs from the upcoming Saturday (today, if `now` is a
/// Saturday) through the end of the following Sunday, bounds inclusive.
pub fn matches_time<Tz: TimeZone>(event: &Event, filter: TimeFilter, now: &DateTime<Tz>) -> bool {
    let tz = now.timezone();
    match filter {
        TimeFilter::All => true,
        TimeFilter::Today => local_date(&event.starts_at, &tz) == now.date_naive(),
        TimeFilter::Tonight => {
            let starts = local_datetime(&event.starts_at, &tz);
            starts.date() == now.date_naive() && starts.hour() >= TONIGHT_START_HOUR
        }
        TimeFilter::ThisWeekend => {
            let saturday = next_weekday(now.date_naive(), Weekday::Sat);
            let sunday = saturday.succ_opt().unwrap_or(saturday);
            let starts = local_datetime(&event.starts_at, &tz);
            starts >= day_start(saturday) && starts <= day_end(sunday)
        }
    }
}

/// The dashboard's combined filter. An event is listed iff the search, tag,
/// and time predicates all hold.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub search: String,
    pub tag: Option<Tag>,
    pub time: TimeFilter,
}

impl EventFilter {
    pub fn matches<Tz: TimeZone>(&self, event: &Event, now: &DateTime<Tz>) -> bool {
        matches_search(event, &self.search)
            && matches_tag(event, self.tag)
            && matches_time(event, self.time, now)
    }

    /// Filters a listing down to the matching events, preserving order.
    pub fn apply<'a, Tz: TimeZone>(
        &self,
        events: &'a [Event],
        now: &DateTime<Tz>,
    ) -> Vec<&'a Event> {
        events.iter().filter(|event| self.matches(event, now)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};
    use quad_contracts::EventStatus;
    use uuid::Uuid;

    use super::*;

    fn event(title: &str, club: &str, starts_at: &str, tags: &[&str]) -> Event {
        let starts_at: DateTime<Utc> = starts_at.parse().unwrap();
        Event {
            id: Uuid::now_v7(),
            title: title.to_string(),
            club: club.to_string(),
            location: "Student Union".to_string(),
            starts_at,
            ends_at: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            current_attendees: 0,
            status: EventStatus::Scheduled,
            creator_id: None,
            created_at: starts_at,
            updated_at: starts_at,
        }
    }

    fn wednesday_noon() -> DateTime<Utc> {
        "2024-06-26T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_search_matches_title_and_club() {
        let e = event("Hackathon Kickoff", "ACM Chapter", "2024-06-28T18:00:00Z", &["tech"]);
        assert!(matches_search(&e, "hack"));
        assert!(matches_search(&e, "HACK"));
        assert!(matches_search(&e, "acm"));
        assert!(!matches_search(&e, "chess"));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let e = event("Trivia Night", "Quiz Bowl", "2024-06-28T19:00:00Z", &["games"]);
        assert!(matches_search(&e, ""));
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let e = event("Career Fair", "Engineering Council", "2024-06-28T10:00:00Z", &["career", "networking"]);
        assert!(matches_tag(&e, None));
        assert!(matches_tag(&e, Some(Tag::Career)));
        assert!(matches_tag(&e, Some(Tag::Networking)));
        assert!(!matches_tag(&e, Some(Tag::Food)));
    }

    #[test]
    fn test_today_matches_on_calendar_day_not_time() {
        let now = wednesday_noon();
        let morning = event("Morning Run", "Run Club", "2024-06-26T07:00:00Z", &["social"]);
        let tomorrow = event("Study Jam", "Math Society", "2024-06-27T07:00:00Z", &["study"]);
        assert!(matches_time(&morning, TimeFilter::Today, &now));
        assert!(!matches_time(&tomorrow, TimeFilter::Today, &now));
    }

    #[test]
    fn test_tonight_requires_evening_start_today() {
        let now = wednesday_noon();
        let evening = event("Trivia Night", "Quiz Bowl", "2024-06-26T19:00:00Z", &["games"]);
        let cutoff = event("Mixer", "Grad Council", "2024-06-26T17:00:00Z", &["social"]);
        let afternoon = event("Workshop", "Maker Space", "2024-06-26T16:59:00Z", &["tech"]);
        let tomorrow_night = event("Movie Night", "Film Society", "2024-06-27T20:00:00Z", &["social"]);

        assert!(matches_time(&evening, TimeFilter::Tonight, &now));
        assert!(matches_time(&cutoff, TimeFilter::Tonight, &now));
        assert!(!matches_time(&afternoon, TimeFilter::Tonight, &now));
        assert!(!matches_time(&tomorrow_night, TimeFilter::Tonight, &now));
    }

    #[test]
    fn test_weekend_window_is_saturday_through_sunday() {
        // 2024-06-26 is a Wednesday; the window is Sat 06-29 .. Sun 06-30
        let now = wednesday_noon();
        let friday = event("Friday Social", "Chess Club", "2024-06-28T23:00:00Z", &["social"]);
        let saturday = event("Tournament", "Chess Club", "2024-06-29T00:00:00Z", &["games"]);
        let sunday = event("Brunch", "Alumni Board", "2024-06-30T23:59:00Z", &["food"]);
        let monday = event("Lecture", "Physics Society", "2024-07-01T00:00:00Z", &["study"]);

        assert!(!matches_time(&friday, TimeFilter::ThisWeekend, &now));
        assert!(matches_time(&saturday, TimeFilter::ThisWeekend, &now));
        assert!(matches_time(&sunday, TimeFilter::ThisWeekend, &now));
        assert!(!matches_time(&monday, TimeFilter::ThisWeekend, &now));
    }

    #[test]
    fn test_weekend_includes_today_when_now_is_saturday() {
        let now: DateTime<Utc> = "2024-06-29T08:00:00Z".parse().unwrap();
        let tonight = event("Concert", "Music Board", "2024-06-29T19:00:00Z", &["social"]);
        assert!(matches_time(&tonight, TimeFilter::ThisWeekend, &now));
        assert!(matches_time(&tonight, TimeFilter::Tonight, &now));
        assert!(matches_time(&tonight, TimeFilter::Today, &now));
    }

    #[test]
    fn test_weekend_window_rolls_over_on_sunday() {
        // On a Sunday the upcoming Saturday is six days out, so the window
        // points at the following weekend
        let now: DateTime<Utc> = "2024-06-30T08:00:00Z".parse().unwrap();
        let today = event("Brunch", "Alumni Board", "2024-06-30T11:00:00Z", &["food"]);
        let next_saturday = event("Tournament", "Chess Club", "2024-07-06T10:00:00Z", &["games"]);
        assert!(!matches_time(&today, TimeFilter::ThisWeekend, &now));
        assert!(matches_time(&next_saturday, TimeFilter::ThisWeekend, &now));
    }

    #[test]
    fn test_time_windows_follow_the_viewer_timezone() {
        // 01:00 UTC on the 27th is 18:00 on the 26th seven hours west
        let tz = FixedOffset::west_opt(7 * 3600).unwrap();
        let now = "2024-06-26T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
        let e = event("Lab Night", "Robotics Club", "2024-06-27T01:00:00Z", &["tech"]);
        assert_eq!(now.timezone(), tz);
        assert!(matches_time(&e, TimeFilter::Today, &now));
        assert!(matches_time(&e, TimeFilter::Tonight, &now));
    }

    #[test]
    fn test_combined_filter_requires_every_predicate() {
        let now = wednesday_noon();
        let e = event("Hackathon Kickoff", "ACM Chapter", "2024-06-26T19:00:00Z", &["tech"]);

        let all = EventFilter::default();
        assert!(all.matches(&e, &now));

        let matching = EventFilter {
            search: "hack".to_string(),
            tag: Some(Tag::Tech),
            time: TimeFilter::Tonight,
        };
        assert!(matching.matches(&e, &now));

        let wrong_tag = EventFilter { tag: Some(Tag::Food), ..matching.clone() };
        assert!(!wrong_tag.matches(&e, &now));

        let wrong_search = EventFilter { search: "chess".to_string(), ..matching };
        assert!(!wrong_search.matches(&e, &now));
    }

    #[test]
    fn test_apply_preserves_listing_order() {
        let now = wednesday_noon();
        let events = vec![
            event("Hackathon Kickoff", "ACM Chapter", "2024-06-26T19:00:00Z", &["tech"]),
            event("Trivia Night", "Quiz Bowl", "2024-06-26T20:00:00Z", &["games"]),
            event("Hack Review", "ACM Chapter", "2024-06-27T19:00:00Z", &["tech"]),
        ];
        let filter = EventFilter { search: "hack".to_string(), ..Default::default() };
        let titles: Vec<&str> = filter.apply(&events, &now).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Hackathon Kickoff", "Hack Review"]);
    }
}
