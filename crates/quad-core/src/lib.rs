// Event Calendar Projection & Filter Engine
//
// Pure, synchronous functions over in-memory event records: day-level date
// helpers, the month-grid projection with event-to-day bucketing, the
// dashboard filter predicates, and draft validation. Events carry absolute
// UTC instants; every view works in the viewer's local calendar, so the
// conversion happens once at the entry points here and all span math runs
// on naive local dates.

pub mod dates;
pub mod filters;
pub mod grid;
pub mod validate;

pub use dates::{day_end, day_key, day_start, days_between, local_date, local_datetime, next_weekday};
pub use filters::{matches_search, matches_tag, matches_time, EventFilter, TimeFilter, TONIGHT_START_HOUR};
pub use grid::{bucket_events, event_span, month_grid, span_position, SpanPosition};
pub use validate::{validate_draft, validate_update, FieldError, ValidationErrors};
