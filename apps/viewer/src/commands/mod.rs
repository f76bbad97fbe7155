//! Commands exposed to the presentation layer.

pub mod search;
pub mod view;
pub mod vocabulary;

pub use search::{reset_filters, select_difficulty, submit_search, type_search};
pub use view::{
    get_observed_regions, get_snapshot, record_signal, resize_viewport, start_observing,
    stop_observing,
};
pub use vocabulary::{load_json, load_sheet, load_vocabulary};

use crate::watcher::WatcherError;
use std::fmt;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<vocab_core::ParseError> for CommandError {
    fn from(e: vocab_core::ParseError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<WatcherError> for CommandError {
    fn from(e: WatcherError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(e: serde_json::Error) -> Self {
        vocab_core::ParseError::from(e).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_keeps_parse_message() {
        let err = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let command: CommandError = err.into();
        assert!(command.message.starts_with("invalid vocabulary JSON: "));
    }
}
