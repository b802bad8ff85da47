use crate::{
    domain::{Column, ColumnId, TaskId},
    error::Result,
    presentation::dnd::DragTracker,
    store::Snapshot,
};
use serde::Serialize;

/// Render props for a single card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: TaskId,
    pub index: usize,
    pub content: String,
    pub is_dragging: bool,
}

/// Render props for a column acting as a drop target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub id: ColumnId,
    pub name: String,
    pub is_dragging_over: bool,
    pub cards: Vec<CardView>,
}

impl ColumnView {
    fn build(column: &Column, drag: &DragTracker) -> Self {
        let dragging = drag.dragging();
        Self {
            id: column.id().clone(),
            name: column.name().to_string(),
            is_dragging_over: drag.dragging_over() == Some(column.id()),
            cards: column
                .items()
                .iter()
                .enumerate()
                .map(|(index, task)| CardView {
                    id: task.id.clone(),
                    index,
                    content: task.content.clone(),
                    is_dragging: dragging == Some(&task.id),
                })
                .collect(),
        }
    }
}

/// Everything needed to draw the board for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub revision: u64,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    pub fn build(snapshot: &Snapshot, drag: &DragTracker) -> Self {
        Self {
            revision: snapshot.revision,
            columns: snapshot
                .board
                .columns()
                .iter()
                .map(|col| ColumnView::build(col, drag))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
