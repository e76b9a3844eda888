//! Mediamock Domain Layer
pub mod errors;
pub mod event;
pub mod listener;

pub use errors::MediaMockError;
pub use event::MediaQueryEvent;
pub use listener::ChangeListener;
