//! # us-infra
//!
//! Infrastructure adapters for unistate: the durable, file-backed
//! implementation of the user-state store port.

pub mod preferences;

pub use preferences::FilePreferenceStore;
