//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: title, subtitle, counts, status and active selection
//! - `DetailPane`: the highlighted row in full
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit high-level events:
//! - `SearchBox`: name search input
//! - `EntryList`: the scrollable API rows
//! - `CategoryPicker`, `SortPicker`: selection overlays
//! - `ErrorDialog`: Dismiss / Retry modal
//!
//! Each component file holds its state type, event type, rendering and
//! tests together. Overlays use the persistent state + transient wrapper
//! pattern: `XState` lives in `TuiState`, `X` borrows it for one frame.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs
//! ├── search_box.rs
//! ├── entry_list.rs
//! ├── detail_pane.rs
//! ├── category_picker.rs
//! ├── sort_picker.rs
//! └── error_dialog.rs
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub mod category_picker;
pub mod detail_pane;
pub mod entry_list;
pub mod error_dialog;
pub mod search_box;
pub mod sort_picker;
mod title_bar;

pub use category_picker::{CategoryPicker, CategoryPickerEvent, CategoryPickerState};
pub use detail_pane::DetailPane;
pub use entry_list::{EntryList, EntryListEvent, EntryListState};
pub use error_dialog::{ErrorChoice, ErrorDialog, ErrorDialogState};
pub use search_box::{SearchBox, SearchEvent};
pub use sort_picker::{SortPicker, SortPickerEvent, SortPickerState};
pub use title_bar::TitleBar;

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
