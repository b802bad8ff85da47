use crate::{
    domain::{Board, ColumnId, DraggableLocation, DropReason, DropResult, TaskId},
    error::{BoardError, Result},
};

#[derive(Debug, Clone)]
struct ActiveDrag {
    draggable_id: TaskId,
    source: DraggableLocation,
    over: Option<DraggableLocation>,
}

/// Pointer-side state of a drag gesture: idle, or one card being dragged
///
/// The tracker never touches the board. Finishing a gesture yields the
/// [`DropResult`] the store consumes.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    active: Option<ActiveDrag>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up `task_id` from wherever it sits on `board`
    pub fn start(&mut self, board: &Board, task_id: &TaskId) -> Result<()> {
        if let Some(active) = &self.active {
            return Err(BoardError::DragInProgress(active.draggable_id.to_string()));
        }
        let source = board
            .locate_task(task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))?;

        tracing::trace!(task = %task_id, column = %source.droppable_id, index = source.index, "Drag started");
        self.active = Some(ActiveDrag {
            draggable_id: task_id.clone(),
            // Hovering starts over the slot the card came from
            over: Some(source.clone()),
            source,
        });
        Ok(())
    }

    /// Updates the slot under the pointer; `None` means outside every column
    ///
    /// Returns whether anything changed. Ignored while idle.
    pub fn hover(&mut self, over: Option<DraggableLocation>) -> bool {
        match &mut self.active {
            Some(active) if active.over != over => {
                active.over = over;
                true
            }
            _ => false,
        }
    }

    /// Releases the card at the current hover slot
    pub fn drop(&mut self) -> Option<DropResult> {
        self.finish(DropReason::Drop)
    }

    /// Abandons the gesture; the result never carries a destination
    pub fn cancel(&mut self) -> Option<DropResult> {
        self.finish(DropReason::Cancel)
    }

    fn finish(&mut self, reason: DropReason) -> Option<DropResult> {
        let active = self.active.take()?;
        let destination = match reason {
            DropReason::Drop => active.over,
            DropReason::Cancel => None,
        };
        Some(DropResult {
            draggable_id: active.draggable_id,
            source: active.source,
            destination,
            reason,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The card currently being dragged
    pub fn dragging(&self) -> Option<&TaskId> {
        self.active.as_ref().map(|a| &a.draggable_id)
    }

    /// The column currently under the pointer
    pub fn dragging_over(&self) -> Option<&ColumnId> {
        self.active
            .as_ref()
            .and_then(|a| a.over.as_ref())
            .map(|loc| &loc.droppable_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Board, TaskId, ColumnId, ColumnId) {
        let board = Board::default();
        let task = board.columns()[0].items()[1].id.clone();
        let requested = board.columns()[0].id().clone();
        let todo = board.columns()[1].id().clone();
        (board, task, requested, todo)
    }

    #[test]
    fn test_drag_lifecycle() {
        let (board, task, requested, todo) = setup();
        let mut tracker = DragTracker::new();
        assert!(!tracker.is_active());

        tracker.start(&board, &task).unwrap();
        assert_eq!(tracker.dragging(), Some(&task));
        assert_eq!(tracker.dragging_over(), Some(&requested));

        assert!(tracker.hover(Some(DraggableLocation::new(todo.clone(), 0))));
        assert_eq!(tracker.dragging_over(), Some(&todo));

        let result = tracker.drop().unwrap();
        assert_eq!(result.draggable_id, task);
        assert_eq!(result.source, DraggableLocation::new(requested, 1));
        assert_eq!(result.destination, Some(DraggableLocation::new(todo, 0)));
        assert_eq!(result.reason, DropReason::Drop);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_drop_outside_columns_has_no_destination() {
        let (board, task, _, _) = setup();
        let mut tracker = DragTracker::new();
        tracker.start(&board, &task).unwrap();

        assert!(tracker.hover(None));
        assert_eq!(tracker.dragging_over(), None);

        let result = tracker.drop().unwrap();
        assert!(!result.has_destination());
    }

    #[test]
    fn test_cancel_discards_destination() {
        let (board, task, _, todo) = setup();
        let mut tracker = DragTracker::new();
        tracker.start(&board, &task).unwrap();
        tracker.hover(Some(DraggableLocation::new(todo, 0)));

        let result = tracker.cancel().unwrap();
        assert_eq!(result.destination, None);
        assert_eq!(result.reason, DropReason::Cancel);
    }

    #[test]
    fn test_idle_tracker_ignores_events() {
        let (_, _, requested, _) = setup();
        let mut tracker = DragTracker::new();

        assert!(!tracker.hover(Some(DraggableLocation::new(requested, 0))));
        assert!(tracker.drop().is_none());
        assert!(tracker.cancel().is_none());
    }

    #[test]
    fn test_hover_same_slot_is_unchanged() {
        let (board, task, requested, _) = setup();
        let mut tracker = DragTracker::new();
        tracker.start(&board, &task).unwrap();

        assert!(!tracker.hover(Some(DraggableLocation::new(requested, 1))));
    }

    #[test]
    fn test_start_errors() {
        let (board, task, _, _) = setup();
        let mut tracker = DragTracker::new();

        let err = tracker.start(&board, &TaskId::generate()).unwrap_err();
        assert!(matches!(err, BoardError::TaskNotFound(_)));

        tracker.start(&board, &task).unwrap();
        let err = tracker.start(&board, &task).unwrap_err();
        assert!(matches!(err, BoardError::DragInProgress(_)));
    }
}
