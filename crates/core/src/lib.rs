//! Mediamock Core
//!
//! Registry-and-dispatch engine for the matchMedia test double, plus the
//! facade it installs on the host global.
//!
//! ## Components
//!
//! - `QueryRegistry`: query string → ordered listener buckets, with
//!   identity-based dedup and snapshot dispatch
//! - `FacadeFactory` / `MediaQueryList`: the handle surface application
//!   code sees, bridging both registration protocols into the registry
//! - `HostGlobal` / `MockWindow`: the seam the facade is installed through
//! - `MatchMediaMock`: the control surface test drivers use
pub mod facade;
pub mod mock;
pub mod ports;
pub mod registry;
pub mod window;

pub use facade::{FacadeFactory, MediaQueryList, CHANGE_EVENT};
pub use mock::MatchMediaMock;
pub use ports::HostGlobal;
pub use registry::QueryRegistry;
pub use window::MockWindow;
