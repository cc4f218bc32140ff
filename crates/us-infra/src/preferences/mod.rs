mod file_store;

pub use file_store::{FilePreferenceStore, DEFAULT_PREFERENCES_FILE};
