//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over the current step; scroll
//! offsets live in [`App`](crate::ui::App).
//!
//! # Pane Modules
//!
//! - [`array`]: array cells with per-role highlighting (binary search, both sorts)
//! - [`heap_tree`]: the live heap drawn level by level (heap sort)
//! - [`graph`]: adjacency listing with node states and traversed edges (BFS, DFS)
//! - [`step`]: action badge, narration and the algorithm's bookkeeping fields
//! - [`history`]: narration of every step so far
//! - [`status`]: status bar with keybindings and playback state
//! - `utils`: shared block, scroll and badge helpers

mod utils;

pub mod array;
pub mod graph;
pub mod heap_tree;
pub mod history;
pub mod status;
pub mod step;

pub use array::{
    binary_search_view, heap_sort_view, quick_sort_view, render_array_pane, ArrayView, CellRole,
};
pub use graph::{render_graph_pane, NodeState};
pub use heap_tree::render_heap_tree_pane;
pub use history::render_history_pane;
pub use status::render_status_bar;
pub use step::render_step_pane;
