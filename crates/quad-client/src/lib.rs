// HTTP client for the Quad events API
//
// The client is constructed explicitly and handed to consumers; an explicit
// configured/unconfigured capability flag replaces any silent dummy
// fallback. Unconfigured clients degrade instead of failing: listings read
// empty and creation synthesizes a local record, which callers treat as
// valid results rather than errors.

pub mod client;
pub mod error;
pub mod identity;

pub use client::{EventsClient, API_URL_ENV};
pub use error::{ClientError, Result};
pub use identity::derive_creator_id;
