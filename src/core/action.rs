//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User picks a category? That's `Action::SelectCategory(..)`.
//! Entries arrive? That's `Action::EntriesLoaded(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! perform. No side effects here. I/O happens in the adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Local;
use log::{debug, info, warn};

use crate::core::selection::SortMethod;
use crate::core::state::App;
use crate::directory::{CategoriesResponse, EntriesResponse, FetchError};

#[derive(Debug)]
pub enum Action {
    /// Issue both directory requests (startup and the error dialog's Retry).
    Fetch,
    EntriesLoaded(Result<EntriesResponse, FetchError>),
    CategoriesLoaded(Result<CategoriesResponse, FetchError>),
    /// `None` is "Show all".
    SelectCategory(Option<String>),
    SetSearch(String),
    ClearSearch,
    SetSort(SortMethod),
    /// Open the documentation link of the row at this index.
    OpenRow(usize),
    /// The link opener rejected a link.
    LinkFailed(FetchError),
    DismissError,
    RetryAfterError,
    Quit,
}

/// I/O the adapter must carry out after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn both fetches.
    SpawnFetch,
    OpenLink(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Fetch => {
            app.in_flight = app.in_flight.saturating_add(2);
            app.status_message = String::from("Loading APIs...");
            Effect::SpawnFetch
        }
        Action::EntriesLoaded(result) => {
            app.in_flight = app.in_flight.saturating_sub(1);
            match result {
                Ok(response) => {
                    info!("Applying {} entries", response.entries.len());
                    app.set_entries(response.entries);
                    app.is_loaded = true;
                    let now = Local::now();
                    app.last_updated = Some(now);
                    app.status_message = format!("Updated {}", now.format("%H:%M"));
                }
                Err(e) => {
                    warn!("Entries fetch failed: {}", e);
                    app.status_message = String::from("Failed to load APIs");
                    app.errors.push_back(e);
                }
            }
            Effect::None
        }
        Action::CategoriesLoaded(result) => {
            app.in_flight = app.in_flight.saturating_sub(1);
            match result {
                Ok(response) => {
                    info!("Applying {} categories", response.categories.len());
                    app.categories = response.categories;
                }
                Err(e) => {
                    warn!("Categories fetch failed: {}", e);
                    app.errors.push_back(e);
                }
            }
            Effect::None
        }
        Action::SelectCategory(category) => {
            app.set_category(category);
            Effect::None
        }
        Action::SetSearch(text) => {
            app.set_search(Some(text));
            Effect::None
        }
        Action::ClearSearch => {
            app.set_search(None);
            Effect::None
        }
        Action::SetSort(method) => {
            app.set_sort(method);
            app.status_message = format!("Sort: {}", method.label());
            Effect::None
        }
        Action::OpenRow(index) => match app.rows().get(index) {
            Some(row) => {
                info!("Opening \"{}\" at {}", row.name, row.link);
                Effect::OpenLink(row.link.clone())
            }
            None => {
                warn!("OpenRow({}) out of range ({} rows)", index, app.rows().len());
                Effect::None
            }
        },
        Action::LinkFailed(e) => {
            app.errors.push_back(e);
            Effect::None
        }
        Action::DismissError => {
            app.errors.pop_front();
            Effect::None
        }
        Action::RetryAfterError => {
            app.errors.clear();
            update(app, Action::Fetch)
        }
        Action::Quit => Effect::Quit,
    }
}
