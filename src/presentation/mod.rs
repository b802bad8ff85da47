//! View layer: turns store snapshots into render props and routes user
//! gestures back to the store.

pub mod dnd;
pub mod page;
pub mod render;
pub mod view;

pub use dnd::DragTracker;
pub use page::{BoardPage, UiEvent};
pub use render::render_text;
pub use view::{BoardView, CardView, ColumnView};
