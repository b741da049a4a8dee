//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (first load, any fetch in flight): draws every ~80ms so
//!   the placeholders pulse and the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events, new rows or
//!   finished fetches.
//!
//! ## Key Routing
//!
//! Events go to the first layer that is open, top down:
//!
//! ```text
//! error dialog  →  category / sort picker  →  search box  →  entry list
//! ```

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::link::{SystemBrowser, open_link};
use crate::core::pipeline::Row;
use crate::core::selection::SelectionState;
use crate::core::state::{App, RowSubscriber};
use crate::directory::{DirectoryClient, HttpDirectoryClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CategoryPickerEvent, CategoryPickerState, EntryListEvent, EntryListState, ErrorChoice,
    ErrorDialogState, SearchBox, SearchEvent, SortPickerEvent, SortPickerState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Arrow keys move through the list, letters are shortcuts.
    Browse,
    /// Keystrokes edit the search box.
    Search,
}

/// Picker overlay currently open, if any.
pub enum Overlay {
    Category(CategoryPickerState),
    Sort(SortPickerState),
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub entry_list: EntryListState,
    pub search_box: SearchBox,
    pub input_mode: InputMode,
    pub overlay: Option<Overlay>,
    pub error_dialog: ErrorDialogState,
    // Animation state
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new(initial_search: Option<&str>) -> Self {
        Self {
            entry_list: EntryListState::new(),
            search_box: SearchBox::new(initial_search),
            input_mode: InputMode::Browse,
            overlay: None,
            error_dialog: ErrorDialogState::default(),
            pulse_value: 0.0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: &ResolvedConfig, selection: SelectionState) -> std::io::Result<()> {
    let client = Arc::new(HttpDirectoryClient::new(Some(config.base_url.clone())));
    info!("Using {} directory client at {}", client.name(), client.base_url());

    let mut tui = TuiState::new(selection.search());
    let mut app = App::with_selection(client, selection);

    let (rows_tx, rows_rx) = mpsc::channel::<usize>();
    app.subscribe(row_count_subscriber(rows_tx));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let effect = update(&mut app, Action::Fetch);
    apply_effect(&mut app, effect, &tx);

    let start_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        if sync_rows(&rows_rx, &mut tui.entry_list) {
            needs_redraw = true;
        }

        let animating = !app.is_loaded || app.is_fetching();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short timeout while animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = route_event(&mut app, &mut tui, event);
            // Later keys in this batch must see the new row count
            sync_rows(&rows_rx, &mut tui.entry_list);
            if apply_effect(&mut app, effect, &tx) {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break;
        }

        // Fetch results from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            apply_effect(&mut app, effect, &tx);
        }
    }

    ratatui::restore();
    info!("public-apis shutting down");
    Ok(())
}

/// Row republishes travel as counts; the list only needs the new length.
fn row_count_subscriber(tx: mpsc::Sender<usize>) -> Box<dyn RowSubscriber> {
    Box::new(move |rows: &[Row]| {
        if tx.send(rows.len()).is_err() {
            warn!("Failed to publish row count: receiver dropped");
        }
    })
}

/// Applies pending row republishes to the list. Returns true if any arrived.
fn sync_rows(rows_rx: &mpsc::Receiver<usize>, entry_list: &mut EntryListState) -> bool {
    let mut changed = false;
    while let Ok(len) = rows_rx.try_recv() {
        entry_list.rows_changed(len);
        changed = true;
    }
    changed
}

/// Turns one terminal event into state changes, returning the resulting effect.
fn route_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        _ => {}
    }

    if !app.errors.is_empty() {
        return match tui.error_dialog.handle_event(&event) {
            Some(ErrorChoice::Dismiss) => update(app, Action::DismissError),
            Some(ErrorChoice::Retry) => update(app, Action::RetryAfterError),
            None => Effect::None,
        };
    }

    if let Some(overlay) = tui.overlay.as_mut() {
        let (action, close) = match overlay {
            Overlay::Category(state) => match state.handle_event(&event) {
                Some(CategoryPickerEvent::Select(category)) => {
                    (Some(Action::SelectCategory(category)), true)
                }
                Some(CategoryPickerEvent::Dismiss) => (None, true),
                None => (None, false),
            },
            Overlay::Sort(state) => match state.handle_event(&event) {
                Some(SortPickerEvent::Select(method)) => (Some(Action::SetSort(method)), true),
                Some(SortPickerEvent::Dismiss) => (None, true),
                None => (None, false),
            },
        };
        if close {
            tui.overlay = None;
        }
        return action.map_or(Effect::None, |a| update(app, a));
    }

    match tui.input_mode {
        InputMode::Search => match tui.search_box.handle_event(&event) {
            Some(SearchEvent::Changed(text)) => update(app, Action::SetSearch(text)),
            Some(SearchEvent::Cleared) => {
                tui.input_mode = InputMode::Browse;
                update(app, Action::ClearSearch)
            }
            Some(SearchEvent::Done) => {
                tui.input_mode = InputMode::Browse;
                Effect::None
            }
            None => Effect::None,
        },
        InputMode::Browse => match event {
            TuiEvent::InputChar('/') => {
                tui.input_mode = InputMode::Search;
                Effect::None
            }
            TuiEvent::InputChar('c') => {
                let active = app.selection().category();
                tui.overlay = Some(Overlay::Category(CategoryPickerState::new(
                    &app.categories,
                    active,
                )));
                Effect::None
            }
            TuiEvent::InputChar('s') => {
                tui.overlay = Some(Overlay::Sort(SortPickerState::new(
                    app.selection().sort_method,
                )));
                Effect::None
            }
            TuiEvent::InputChar('q') => update(app, Action::Quit),
            TuiEvent::Escape if app.selection().search().is_some() => {
                tui.search_box.buffer.clear();
                update(app, Action::ClearSearch)
            }
            _ => match tui.entry_list.handle_event(&event) {
                Some(EntryListEvent::Open(index)) => update(app, Action::OpenRow(index)),
                None => Effect::None,
            },
        },
    }
}

/// Carries out an effect. Returns true when the app should exit.
fn apply_effect(app: &mut App, effect: Effect, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnFetch => {
            spawn_fetch(app.client.clone(), tx.clone());
            false
        }
        Effect::OpenLink(link) => {
            match open_link(&SystemBrowser, &link) {
                Ok(true) => app.status_message = String::from("Opened in browser"),
                Ok(false) => app.status_message = String::from("Could not launch a browser"),
                Err(e) => {
                    update(app, Action::LinkFailed(e));
                }
            }
            false
        }
    }
}

/// Issues both directory requests concurrently. Each result comes back as
/// its own action; whichever lands last wins.
fn spawn_fetch(client: Arc<dyn DirectoryClient>, tx: mpsc::Sender<Action>) {
    info!("Spawning directory fetch via {}", client.name());

    let entries_client = client.clone();
    let entries_tx = tx.clone();
    tokio::spawn(async move {
        let result = entries_client.fetch_entries().await;
        if entries_tx.send(Action::EntriesLoaded(result)).is_err() {
            warn!("Failed to send entries result: receiver dropped");
        }
    });

    tokio::spawn(async move {
        let result = client.fetch_categories().await;
        if tx.send(Action::CategoriesLoaded(result)).is_err() {
            warn!("Failed to send categories result: receiver dropped");
        }
    });
}
