//! # Taskboard Core
//!
//! State and view layer for a drag-and-drop kanban board.
//!
//! The board is a fixed row of columns holding ordered tasks. Tasks are added
//! to a configured inbox column and relocated by drag gestures; every change
//! is a pure transformation producing a new board, published to subscribers
//! as an immutable snapshot.

pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;
pub mod store;

// Re-export commonly used types
pub use config::{BoardConfig, SeedTask};
pub use domain::{
    board::{Board, Column, ColumnId, DraggableLocation},
    drop::{DropReason, DropResult},
    task::{Task, TaskId},
};
pub use error::{BoardError, Result};
pub use presentation::{BoardPage, BoardView, UiEvent};
pub use store::{BoardStore, Snapshot};
