// Events API client over reqwest

use chrono::Utc;
use quad_contracts::{
    CreateEventRequest, DataResponse, DeleteEventRequest, ErrorResponse, Event, EventStatus,
    ListResponse, UpdateEventRequest,
};
use quad_core::validate_draft;
use reqwest::{Client, Response, StatusCode};
use uuid::Uuid;

use crate::error::{ClientError, Result};

/// Environment variable naming the API base URL, e.g. `http://localhost:4000`
pub const API_URL_ENV: &str = "QUAD_API_URL";

#[derive(Clone)]
pub struct EventsClient {
    client: Client,
    base_url: Option<String>,
}

impl EventsClient {
    /// Create a configured client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    /// Create an unconfigured client that serves degraded results
    pub fn unconfigured() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Create a client from the QUAD_API_URL environment variable.
    /// Unset or empty yields an unconfigured client rather than an error.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => {
                tracing::warn!(
                    "{} not set, events client running in degraded mode",
                    API_URL_ENV
                );
                Self::unconfigured()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// GET /api/events - list events, optionally narrowed by status.
    /// Degraded mode reads empty. Fetches are independent and unsequenced;
    /// callers that overlap them see the last response win.
    pub async fn list_events(&self, status: Option<EventStatus>) -> Result<Vec<Event>> {
        let Some(base_url) = &self.base_url else {
            tracing::warn!("Listing events without a configured backend, returning none");
            return Ok(vec![]);
        };

        let mut request = self.client.get(format!("{base_url}/api/events"));
        if let Some(status) = status {
            request = request.query(&[("status", status.to_string())]);
        }

        let response = request.send().await?;
        let body: ListResponse<Event> = read_json(response).await?;
        Ok(body.data)
    }

    /// POST /api/events - validate a draft locally, then create it.
    ///
    /// A draft that fails validation is rejected before any request is
    /// issued. Degraded mode synthesizes the record locally instead.
    pub async fn create_event(&self, draft: &CreateEventRequest) -> Result<Event> {
        validate_draft(draft)?;

        let Some(base_url) = &self.base_url else {
            tracing::warn!("Creating event without a configured backend, synthesizing locally");
            return Ok(synthesize_event(draft));
        };

        let response = self
            .client
            .post(format!("{base_url}/api/events"))
            .json(draft)
            .send()
            .await?;
        let body: DataResponse<Event> = read_json(response).await?;
        Ok(body.data)
    }

    /// GET /api/events/:id - `None` when the event does not exist.
    /// Requires a configured backend: there is no degraded answer that
    /// would not read as "the event is gone".
    pub async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        let base_url = self.base_url.as_ref().ok_or(ClientError::Unconfigured)?;

        let response = self
            .client
            .get(format!("{base_url}/api/events/{id}"))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: DataResponse<Event> = read_json(response).await?;
        Ok(Some(body.data))
    }

    /// PUT /api/events/:id - partial update, owner-gated server side.
    /// Requires a configured backend.
    pub async fn update_event(&self, id: Uuid, update: &UpdateEventRequest) -> Result<Event> {
        let base_url = self.base_url.as_ref().ok_or(ClientError::Unconfigured)?;

        let response = self
            .client
            .put(format!("{base_url}/api/events/{id}"))
            .json(update)
            .send()
            .await?;
        let body: DataResponse<Event> = read_json(response).await?;
        Ok(body.data)
    }

    /// DELETE /api/events/:id - owner-gated server side.
    /// Requires a configured backend.
    pub async fn delete_event(&self, id: Uuid, creator_id: impl Into<String>) -> Result<()> {
        let base_url = self.base_url.as_ref().ok_or(ClientError::Unconfigured)?;

        let body = DeleteEventRequest {
            creator_id: Some(creator_id.into()),
        };
        let response = self
            .client
            .delete(format!("{base_url}/api/events/{id}"))
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(())
    }
}

/// Build the degraded-mode record for a validated draft. Fields mirror what
/// the server would return, with a client-generated time-ordered id.
fn synthesize_event(draft: &CreateEventRequest) -> Event {
    let now = Utc::now();
    Event {
        id: Uuid::now_v7(),
        title: draft.title.clone().unwrap_or_default(),
        club: draft.club.clone().unwrap_or_default(),
        location: draft.location.clone().unwrap_or_default(),
        starts_at: draft.starts_at.unwrap_or(now),
        ends_at: draft.ends_at,
        tags: draft.tags.clone(),
        current_attendees: draft.current_attendees.unwrap_or(0),
        status: EventStatus::Scheduled,
        creator_id: draft.creator_id.clone(),
        created_at: now,
        updated_at: now,
    }
}

/// Decode a success body, or map a failure status to `ClientError::Api`
/// carrying the `{ error }` envelope's message when the server sent one.
async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => "unexpected server error".to_string(),
    };
    ClientError::Api { status, message }
}
