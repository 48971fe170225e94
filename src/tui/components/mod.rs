//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is props-based: it receives all data as struct fields
//! and renders it. None of them reads `App` directly, so each can be tested
//! against a `TestBackend` with hand-built props.
//!
//! - `TitleBar`: Top status bar with phase, direction, delay and counters
//! - `SortBars`: The array as coloured vertical bars
//! - `KeyHints`: Footer listing the active key bindings
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── sort_bars.rs     (Bar chart of the array)
//! └── key_hints.rs     (Footer)
//! ```

pub mod key_hints;
pub mod sort_bars;
pub mod title_bar;

pub use key_hints::KeyHints;
pub use sort_bars::SortBars;
pub use title_bar::TitleBar;
