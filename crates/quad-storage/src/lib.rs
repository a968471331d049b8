// Postgres storage layer with sqlx
//
// Rows here are internal and may differ from the public DTOs; the API's
// service layer owns the mapping between the two.

pub mod models;
pub mod repositories;

pub use models::*;
pub use repositories::*;
