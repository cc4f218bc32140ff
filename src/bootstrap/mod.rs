//! Bootstrap: logging, dependency wiring, and the runtime handle.

mod logging;
mod runtime;
mod wiring;

pub use logging::init_tracing;
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{bootstrap, WiringError};
