//! Month-grid projection and event-to-day bucketing for the calendar view.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate, TimeZone, Weekday};
use quad_contracts::Event;

use crate::dates::{day_key, days_between, local_date};

/// Where a day sits within an event's span. Start and end cells get capped
/// indicator ends in the calendar, interior cells a continuous bar; a
/// single-day event is both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanPosition {
    pub is_start: bool,
    pub is_end: bool,
}

/// The ordered days backing a month view of `reference`'s month: from the
/// Sunday on or before the 1st through the Saturday on or after the last
/// day. Always whole Sunday-to-Saturday weeks, so the length is a multiple
/// of 7 and leading/trailing cells come from the adjacent months.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = reference.with_day(1).unwrap();
    let last = (first + Months::new(1)).pred_opt().unwrap_or(first);

    let mut start = first;
    while start.weekday() != Weekday::Sun {
        start = start.pred_opt().unwrap_or(start);
    }

    let mut end = last;
    while end.weekday() != Weekday::Sat {
        end = end.succ_opt().unwrap_or(end);
    }

    days_between(start, end)
}

/// The inclusive run of calendar days an event touches in the viewer's
/// timezone. An event without an end is contained in its start day.
pub fn event_span<Tz: TimeZone>(event: &Event, tz: &Tz) -> Vec<NaiveDate> {
    let start = local_date(&event.starts_at, tz);
    let end = local_date(&event.ends_at.unwrap_or(event.starts_at), tz);
    days_between(start, end)
}

/// Groups events by the days they touch, keyed by [`day_key`]. A multi-day
/// event appears in every bucket its span covers. Within a bucket, events
/// keep the order of the input slice.
pub fn bucket_events<'a, Tz: TimeZone>(
    events: &'a [Event],
    tz: &Tz,
) -> BTreeMap<String, Vec<&'a Event>> {
    let mut buckets: BTreeMap<String, Vec<&Event>> = BTreeMap::new();
    for event in events {
        for day in event_span(event, tz) {
            buckets.entry(day_key(day)).or_default().push(event);
        }
    }
    buckets
}

/// Resolves whether `day` is the first and/or last day of the event's span.
/// Days outside the span report neither.
pub fn span_position<Tz: TimeZone>(event: &Event, day: NaiveDate, tz: &Tz) -> SpanPosition {
    let span = event_span(event, tz);
    SpanPosition {
        is_start: span.first() == Some(&day),
        is_end: span.last() == Some(&day),
    }
}
