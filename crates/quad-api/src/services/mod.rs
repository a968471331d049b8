// Services layer for business logic
// Services own validation and the ownership gate, calling storage directly

pub mod event;

pub use event::EventService;
