use dioxus_logger::tracing;

use crate::client::error::ApiError;

/// List fetched once from the backend for a page section.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData<T> {
    Loading,
    Loaded(Vec<T>),
    /// The fetch failed; holds the text shown in place of the list.
    Failed(String),
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> RemoteData<T> {
    /// Record the outcome of the section's fetch, logging failures.
    pub fn from_result(section: &str, result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => {
                tracing::debug!(section, count = items.len(), "Loaded section data");

                Self::Loaded(items)
            }
            Err(err) => {
                tracing::error!(section, "Failed to load section data: {}", err);

                Self::Failed(err.user_message())
            }
        }
    }

    /// Items to render; empty unless loaded.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }
}
