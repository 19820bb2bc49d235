//! Error types for the browser surface.

use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AppError {
    #[display("no global `window` exists")]
    NoWindow,
    #[display("window has no document")]
    NoDocument,
    /// A DOM element the game depends on is not on the page.
    #[display("missing element #{id}")]
    MissingElement { id: String },
    #[display("local storage unavailable: {reason}")]
    Storage { reason: String },
    #[display("invalid settings: {reason}")]
    Settings { reason: String },
}

impl AppError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}
