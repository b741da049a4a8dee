//! # Application State
//!
//! Core business state. No TUI-specific types live here; presentation
//! state is owned by the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn DirectoryClient>   // directory access
//! ├── entries: Vec<Entry>                // last successful fetch
//! ├── categories: Vec<String>            // category picker contents
//! ├── selection: SelectionState          // category / search / sort
//! ├── rows: Vec<Row>                     // derived, never set directly
//! ├── is_loaded: bool                    // first entries fetch done
//! ├── in_flight: u8                      // requests not yet reported
//! ├── errors: VecDeque<FetchError>       // shown one at a time
//! ├── status_message: String             // status bar text
//! └── last_updated: Option<DateTime>     // time of last entries fetch
//! ```
//!
//! Every setter on `entries` or `selection` recomputes `rows` immediately
//! and hands them to the registered [`RowSubscriber`]. Mutation happens
//! only on the event-loop thread, through `update()` in action.rs.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Local};
use log::debug;

use crate::core::pipeline::{Row, shape_rows};
use crate::core::selection::{SelectionState, SortMethod};
use crate::directory::{DirectoryClient, Entry, FetchError};

/// Receives the row sequence every time it is recomputed.
pub trait RowSubscriber: Send {
    fn rows_changed(&mut self, rows: &[Row]);
}

impl<F> RowSubscriber for F
where
    F: FnMut(&[Row]) + Send,
{
    fn rows_changed(&mut self, rows: &[Row]) {
        self(rows)
    }
}

pub struct App {
    pub client: Arc<dyn DirectoryClient>,
    entries: Vec<Entry>,
    pub categories: Vec<String>,
    selection: SelectionState,
    rows: Vec<Row>,
    subscriber: Option<Box<dyn RowSubscriber>>,
    pub is_loaded: bool,
    /// Number of fetches spawned but not yet reported back.
    pub in_flight: u8,
    pub errors: VecDeque<FetchError>,
    pub status_message: String,
    pub last_updated: Option<DateTime<Local>>,
}

impl App {
    pub fn new(client: Arc<dyn DirectoryClient>) -> Self {
        Self::with_selection(client, SelectionState::default())
    }

    pub fn with_selection(client: Arc<dyn DirectoryClient>, selection: SelectionState) -> Self {
        Self {
            client,
            entries: Vec::new(),
            categories: Vec::new(),
            selection,
            rows: Vec::new(),
            subscriber: None,
            is_loaded: false,
            in_flight: 0,
            errors: VecDeque::new(),
            status_message: String::from("Loading APIs..."),
            last_updated: None,
        }
    }

    /// Registers the single row subscriber, replacing any previous one.
    /// The current rows are delivered right away.
    pub fn subscribe(&mut self, subscriber: Box<dyn RowSubscriber>) {
        let mut subscriber = subscriber;
        subscriber.rows_changed(&self.rows);
        self.subscriber = Some(subscriber);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    /// Replaces the entry set wholesale.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.recompute();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.selection.selected_category = category.filter(|c| !c.is_empty());
        self.recompute();
    }

    pub fn set_search(&mut self, text: Option<String>) {
        self.selection.search_text = text.filter(|t| !t.is_empty());
        self.recompute();
    }

    pub fn set_sort(&mut self, method: SortMethod) {
        self.selection.sort_method = method;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.rows = shape_rows(&self.entries, &self.selection);
        debug!(
            "Recomputed {} rows from {} entries ({:?})",
            self.rows.len(),
            self.entries.len(),
            self.selection
        );
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber.rows_changed(&self.rows);
        }
    }
}
