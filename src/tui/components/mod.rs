//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing the API source and status text
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local presentation state and may emit events:
//! - `PostList`: Selectable Home screen list (selection lives in
//!   `PostListState`, emits `PostListEvent::Open`)
//! - `PostDetail`: Scrollable post + comments view (scroll offset lives in
//!   `PostDetailState`)
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (borrowed slices from the
//! core `App`), not by reaching into global state. The persistent `*State`
//! structs live in `TuiState` and survive across frames; the render
//! wrappers are recreated every frame with fresh borrows. This keeps
//! dependencies explicit and the components testable with `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── avatar.rs       (Stable per-author glyph + color)
//! ├── title_bar.rs    (Top status bar)
//! ├── post_list.rs    (Home screen list)
//! └── post_detail.rs  (Post + comments view)
//! ```

pub mod avatar;
pub mod post_detail;
pub mod post_list;
mod title_bar;

pub use post_detail::{PostDetail, PostDetailState};
pub use post_list::{PostList, PostListEvent, PostListState};
pub use title_bar::TitleBar;
