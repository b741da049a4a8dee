//! # Core Application Logic
//!
//! This module contains the directory browser's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • pipeline (rows)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Print    │
//!           │  Adapter   │              │   mode     │
//!           │ (ratatui)  │              │  (stdout)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`pipeline`]: Filter, sort and project entries into rows
//! - [`selection`]: Category, search and sort choices
//! - [`link`]: Opening documentation links
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod link;
pub mod pipeline;
pub mod selection;
pub mod state;
