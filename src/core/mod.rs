//! # Core Application Logic
//!
//! This module contains Holidaze's business logic.
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
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    API     │
//!             │  Adapter   │ ───────▶ │  (reqwest) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`enquiry`]: Enquiry form state, field reducer and validation
//! - [`messages`]: Messages table state
//! - [`lifecycle`]: Idle / Pending / Succeeded / Failed for one request
//! - [`dashboard`]: Tag-to-panel mapping
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod dashboard;
pub mod enquiry;
pub mod lifecycle;
pub mod messages;
pub mod state;
