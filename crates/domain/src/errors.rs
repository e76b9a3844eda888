use thiserror::Error;

/// The mock's only error kind.
///
/// Everything else that could go wrong (removing an unknown listener,
/// registering a duplicate, an unrecognized event kind) is a deliberate
/// silent no-op so test authors never have to guard their calls.
#[derive(Error, Debug)]
pub enum MediaMockError {
    #[error("Invalid media query: {0}")]
    InvalidQuery(String),
}
