pub mod board;
pub mod drop;
pub mod task;

pub use board::{Board, Column, ColumnId, DraggableLocation};
pub use drop::{DropReason, DropResult};
pub use task::{Task, TaskId};
