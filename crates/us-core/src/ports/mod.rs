//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases,
//! projections, router) and infrastructure implementations, keeping the
//! domain independent of the storage mechanism.

pub mod errors;
pub mod user_state;

pub use errors::StorageError;
pub use user_state::{UserStatePort, UserStateStream};
