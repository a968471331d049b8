// Event service for business logic

use std::sync::Arc;

use quad_contracts::{CreateEventRequest, Event, EventStatus, UpdateEventRequest};
use quad_core::{validate_draft, validate_update};
use quad_storage::{
    models::{CreateEvent, UpdateEvent},
    Database,
};
use uuid::Uuid;

use crate::error::ApiError;

pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateEventRequest) -> Result<Event, ApiError> {
        validate_draft(&req)?;

        // validation guarantees the required fields are present
        let input = CreateEvent {
            title: req.title.unwrap_or_default(),
            club: req.club.unwrap_or_default(),
            location: req.location.unwrap_or_default(),
            starts_at: req.starts_at.unwrap_or_default(),
            ends_at: req.ends_at,
            tags: req.tags,
            current_attendees: req.current_attendees.unwrap_or(0),
            creator_id: req.creator_id,
        };
        let row = self.db.create_event(input).await?;
        Ok(Self::row_to_event(row))
    }

    pub async fn list(&self, status: Option<EventStatus>) -> Result<Vec<Event>, ApiError> {
        let status = status.map(|s| s.to_string());
        let rows = self.db.list_events(status.as_deref()).await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Event, ApiError> {
        let row = self.db.get_event(id).await?.ok_or(ApiError::NotFound)?;
        Ok(Self::row_to_event(row))
    }

    pub async fn update(&self, id: Uuid, req: UpdateEventRequest) -> Result<Event, ApiError> {
        let current = self.load_owned(id, req.creator_id.as_deref()).await?;
        validate_update(&req, &current)?;

        let input = UpdateEvent {
            title: req.title,
            club: req.club,
            location: req.location,
            starts_at: req.starts_at,
            ends_at: req.ends_at,
            tags: req.tags,
            current_attendees: req.current_attendees,
            status: req.status.map(|s| s.to_string()),
        };
        let row = self
            .db
            .update_event(id, input)
            .await?
            .ok_or(ApiError::NotFound)?;
        Ok(Self::row_to_event(row))
    }

    pub async fn delete(&self, id: Uuid, creator_id: Option<&str>) -> Result<(), ApiError> {
        self.load_owned(id, creator_id).await?;
        let deleted = self.db.delete_event(id).await?;
        if deleted {
            Ok(())
        } else {
            Err(ApiError::NotFound)
        }
    }

    /// Ownership gate shared by update and delete: no creator_id presented
    /// is 401, a mismatch against the stored creator is 403, a missing event
    /// is 404. Events stored without a creator accept any presented id.
    async fn load_owned(&self, id: Uuid, creator_id: Option<&str>) -> Result<Event, ApiError> {
        let creator_id = match creator_id.map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => return Err(ApiError::Unauthorized),
        };

        let row = self.db.get_event(id).await?.ok_or(ApiError::NotFound)?;
        let event = Self::row_to_event(row);
        if let Some(stored) = &event.creator_id {
            if stored != creator_id {
                return Err(ApiError::Forbidden);
            }
        }
        Ok(event)
    }

    fn row_to_event(row: quad_storage::EventRow) -> Event {
        Event {
            id: row.id,
            title: row.title,
            club: row.club,
            location: row.location,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            tags: row.tags,
            current_attendees: row.current_attendees,
            status: EventStatus::from(row.status.as_str()),
            creator_id: row.creator_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
