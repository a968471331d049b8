// Public contracts for the Quad events API
// This crate defines the Event entity, request/response DTOs, and the
// wire envelopes shared by the server, the client, and the engine.

pub mod common;
pub mod event;
pub mod tag;

pub use common::*;
pub use event::*;
pub use tag::*;
