//! # Introduction
//!
//! algoviz runs classic algorithms eagerly and records a snapshot of their
//! state at every meaningful event.  The resulting trace can be replayed
//! forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), or dumped as JSON.
//!
//! ## Pipeline
//!
//! ```text
//! Text input → Problem → Tracer → Trace → TUI / JSON / plain text
//! ```
//!
//! 1. [`input`]: parses array, target, edge-list and start-node text into an
//!    [`algorithms::Problem`].
//! 2. [`algorithms`]: one pure tracer per algorithm (binary search, heap sort,
//!    quick sort, BFS, DFS).
//! 3. [`trace`]: the [`trace::Trace`] container and the [`trace::TraceStep`]
//!    trait shared by every step type.
//! 4. [`playback`]: position, play/pause and speed over a trace.
//! 5. [`config`]: `algoviz.toml` settings.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algoviz::algorithms::binary_search::binary_search;
//!
//! let trace = binary_search(&[1, 3, 5, 7, 9], 7);
//! assert_eq!(trace.len(), 2);
//! assert!(trace.last().unwrap().found);
//! ```

pub mod algorithms;
pub mod config;
pub mod input;
pub mod playback;
pub mod trace;
pub mod ui;
