//! # Core Application Logic
//!
//! This module contains sortviz's business logic.
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
//!                    │  • Config (layered)     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Headless  │
//!     │  Adapter   │                          │    run     │
//!     │ (ratatui)  │                          │ (main.rs)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`config`]: Defaults, config file, env vars and CLI flags collapsed into one

pub mod action;
pub mod config;
pub mod state;
