//! Draft validation for event creation and edits.
//!
//! Checks run before any network or database work: the client uses them to
//! surface inline form errors without issuing a request, the server to
//! answer 400s with the same messages.

use quad_contracts::{CreateEventRequest, Event, Tag, UpdateEventRequest};

/// A single failed check, addressed to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Every check that failed for a draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let summary = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{summary}")
    }
}

impl std::error::Error for ValidationErrors {}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn check_tags(errors: &mut Vec<FieldError>, tags: &[String]) {
    if tags.is_empty() {
        errors.push(FieldError::new("tags", "Pick at least one tag"));
        return;
    }
    for tag in tags {
        if tag.parse::<Tag>().is_err() {
            errors.push(FieldError::new("tags", format!("Unknown tag: {tag}")));
        }
    }
}

/// Validates a creation draft. All failed checks are reported at once so a
/// form can mark every offending field in a single pass.
pub fn validate_draft(draft: &CreateEventRequest) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if is_blank(&draft.title) {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if is_blank(&draft.club) {
        errors.push(FieldError::new("club", "Club is required"));
    }
    if is_blank(&draft.location) {
        errors.push(FieldError::new("location", "Location is required"));
    }
    if draft.starts_at.is_none() {
        errors.push(FieldError::new("starts_at", "Start time is required"));
    }
    if let (Some(starts_at), Some(ends_at)) = (draft.starts_at, draft.ends_at) {
        if ends_at <= starts_at {
            errors.push(FieldError::new("ends_at", "End time must be after the start time"));
        }
    }
    check_tags(&mut errors, &draft.tags);
    if draft.current_attendees.unwrap_or(0) < 0 {
        errors.push(FieldError::new("current_attendees", "Attendee count cannot be negative"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Validates a partial update against the stored event it would apply to.
/// Omitted fields keep their stored values, so the time-ordering check runs
/// on the merged result.
pub fn validate_update(update: &UpdateEventRequest, current: &Event) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if update.title.is_some() && is_blank(&update.title) {
        errors.push(FieldError::new("title", "Title cannot be empty"));
    }
    if update.club.is_some() && is_blank(&update.club) {
        errors.push(FieldError::new("club", "Club cannot be empty"));
    }
    if update.location.is_some() && is_blank(&update.location) {
        errors.push(FieldError::new("location", "Location cannot be empty"));
    }

    let starts_at = update.starts_at.unwrap_or(current.starts_at);
    if let Some(ends_at) = update.ends_at.or(current.ends_at) {
        if ends_at <= starts_at {
            errors.push(FieldError::new("ends_at", "End time must be after the start time"));
        }
    }

    if let Some(tags) = &update.tags {
        check_tags(&mut errors, tags);
    }
    if update.current_attendees.is_some_and(|n| n < 0) {
        errors.push(FieldError::new("current_attendees", "Attendee count cannot be negative"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use quad_contracts::EventStatus;
    use uuid::Uuid;

    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn draft() -> CreateEventRequest {
        CreateEventRequest {
            title: Some("Hackathon Kickoff".to_string()),
            club: Some("ACM Chapter".to_string()),
            location: Some("Engineering Hall 201".to_string()),
            starts_at: Some(ts("2024-06-28T18:00:00Z")),
            ends_at: None,
            tags: vec!["tech".to_string()],
            current_attendees: None,
            creator_id: None,
        }
    }

    fn stored() -> Event {
        Event {
            id: Uuid::now_v7(),
            title: "Hackathon Kickoff".to_string(),
            club: "ACM Chapter".to_string(),
            location: "Engineering Hall 201".to_string(),
            starts_at: ts("2024-06-28T18:00:00Z"),
            ends_at: Some(ts("2024-06-28T21:00:00Z")),
            tags: vec!["tech".to_string()],
            current_attendees: 12,
            status: EventStatus::Scheduled,
            creator_id: None,
            created_at: ts("2024-06-01T00:00:00Z"),
            updated_at: ts("2024-06-01T00:00:00Z"),
        }
    }

    fn fields(errors: &ValidationErrors) -> Vec<&'static str> {
        errors.errors().iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_draft(&draft()).is_ok());
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let empty = CreateEventRequest::default();
        let errors = validate_draft(&empty).unwrap_err();
        assert_eq!(fields(&errors), vec!["title", "club", "location", "starts_at", "tags"]);
    }

    #[test]
    fn test_whitespace_only_title_is_rejected() {
        let mut d = draft();
        d.title = Some("   ".to_string());
        let errors = validate_draft(&d).unwrap_err();
        assert_eq!(fields(&errors), vec!["title"]);
    }

    #[test]
    fn test_end_must_follow_start() {
        let mut d = draft();
        d.ends_at = Some(ts("2024-06-28T18:00:00Z"));
        let errors = validate_draft(&d).unwrap_err();
        assert_eq!(fields(&errors), vec!["ends_at"]);

        d.ends_at = Some(ts("2024-06-28T19:30:00Z"));
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let mut d = draft();
        d.tags = vec!["tech".to_string(), "underwater".to_string()];
        let errors = validate_draft(&d).unwrap_err();
        assert_eq!(fields(&errors), vec!["tags"]);
        assert!(errors.to_string().contains("Unknown tag: underwater"));
    }

    #[test]
    fn test_negative_attendees_is_rejected() {
        let mut d = draft();
        d.current_attendees = Some(-3);
        let errors = validate_draft(&d).unwrap_err();
        assert_eq!(fields(&errors), vec!["current_attendees"]);
    }

    #[test]
    fn test_update_checks_merged_times() {
        // Moving the start past the stored end must fail even though the
        // update itself carries no end time
        let update = UpdateEventRequest {
            starts_at: Some(ts("2024-06-28T22:00:00Z")),
            ..Default::default()
        };
        let errors = validate_update(&update, &stored()).unwrap_err();
        assert_eq!(fields(&errors), vec!["ends_at"]);
    }

    #[test]
    fn test_update_with_omitted_fields_passes() {
        let update = UpdateEventRequest {
            location: Some("Library Lawn".to_string()),
            ..Default::default()
        };
        assert!(validate_update(&update, &stored()).is_ok());
    }

    #[test]
    fn test_update_rejects_emptied_fields() {
        let update = UpdateEventRequest {
            title: Some("".to_string()),
            tags: Some(vec![]),
            ..Default::default()
        };
        let errors = validate_update(&update, &stored()).unwrap_err();
        assert_eq!(fields(&errors), vec!["title", "tags"]);
    }

    #[test]
    fn test_display_joins_field_messages() {
        let errors = ValidationErrors(vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("tags", "Pick at least one tag"),
        ]);
        assert_eq!(errors.to_string(), "title: Title is required; tags: Pick at least one tag");
    }
}
