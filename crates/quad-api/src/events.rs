// Event CRUD HTTP routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use quad_contracts::{
    CreateEventRequest, DataResponse, DeleteEventRequest, ErrorResponse, Event, EventStatus,
    ListResponse, UpdateEventRequest,
};
use quad_storage::Database;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/events", post(create_event).get(list_events))
        .route(
            "/api/events/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    pub status: Option<EventStatus>,
}

/// POST /api/events - Create a new event
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = DataResponse<Event>),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<DataResponse<Event>>), ApiError> {
    let event = state.service.create(req).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(event))))
}

/// GET /api/events - List events ordered by start time
#[utoipa::path(
    get,
    path = "/api/events",
    params(
        ("status" = Option<EventStatus>, Query, description = "Only return events with this status")
    ),
    responses(
        (status = 200, description = "List of events", body = ListResponse<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<ListResponse<Event>>, ApiError> {
    let events = state.service.list(query.status).await?;
    Ok(Json(ListResponse::new(events)))
}

/// GET /api/events/{id} - Get event by ID
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = DataResponse<Event>),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DataResponse<Event>>, ApiError> {
    let event = state.service.get(id).await?;
    Ok(Json(DataResponse::new(event)))
}

/// PUT /api/events/{id} - Update event (creator only)
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = DataResponse<Event>),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "No creator_id presented", body = ErrorResponse),
        (status = 403, description = "Not the creator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<DataResponse<Event>>, ApiError> {
    let event = state.service.update(id, req).await?;
    Ok(Json(DataResponse::new(event)))
}

/// DELETE /api/events/{id} - Delete event (creator only)
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = DeleteEventRequest,
    responses(
        (status = 204, description = "Event deleted successfully"),
        (status = 401, description = "No creator_id presented", body = ErrorResponse),
        (status = 403, description = "Not the creator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<DeleteEventRequest>>,
) -> Result<StatusCode, ApiError> {
    let creator_id = body.and_then(|Json(b)| b.creator_id);
    state.service.delete(id, creator_id.as_deref()).await?;
    Ok(StatusCode::NO_CONTENT)
}
