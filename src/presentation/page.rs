use crate::{
    config::BoardConfig,
    domain::{DraggableLocation, TaskId},
    error::Result,
    presentation::{dnd::DragTracker, render::render_text, view::BoardView},
    store::{BoardStore, Snapshot},
};
use tokio::sync::watch;

/// A user gesture delivered to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The task text field was edited
    InputChanged(String),
    /// The "Create Task" button was pressed
    CreateClicked,
    DragStarted(TaskId),
    /// The pointer moved over a slot, or off every column
    DragHovered(Option<DraggableLocation>),
    DragEnded,
    DragCancelled,
}

/// The board page: input field, drag state and the last rendered view
///
/// The page never edits the board directly. It forwards gestures to the
/// store and redraws when its subscription sees a new snapshot.
pub struct BoardPage {
    store: BoardStore,
    updates: watch::Receiver<Snapshot>,
    input: String,
    drag: DragTracker,
    view: BoardView,
    renders: u64,
}

impl BoardPage {
    pub fn new(store: BoardStore) -> Self {
        let mut updates = store.subscribe();
        let drag = DragTracker::new();
        let view = BoardView::build(&updates.borrow_and_update(), &drag);
        Self {
            store,
            updates,
            input: String::new(),
            drag,
            view,
            renders: 1,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        Ok(Self::new(BoardStore::from_config(config)?))
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Current contents of the task text field
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of times the board has been drawn, including the first draw
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Handles one gesture; returns whether the board was redrawn
    ///
    /// A rejected drop still ends the gesture and redraws before the error
    /// is returned.
    pub fn handle(&mut self, event: UiEvent) -> Result<bool> {
        let (drag_changed, outcome) = match event {
            UiEvent::InputChanged(text) => {
                self.input = text;
                (false, Ok(()))
            }
            UiEvent::CreateClicked => {
                let text = std::mem::take(&mut self.input);
                self.store.create_task(&text);
                (false, Ok(()))
            }
            UiEvent::DragStarted(task_id) => {
                let board = self.store.board();
                self.drag.start(&board, &task_id)?;
                (true, Ok(()))
            }
            UiEvent::DragHovered(over) => (self.drag.hover(over), Ok(())),
            UiEvent::DragEnded => match self.drag.drop() {
                Some(result) => (true, self.store.apply_drop(&result).map(|_| ())),
                None => (false, Ok(())),
            },
            UiEvent::DragCancelled => (self.drag.cancel().is_some(), Ok(())),
        };

        let redrawn = self.refresh(drag_changed);
        outcome.map(|_| redrawn)
    }

    fn refresh(&mut self, drag_changed: bool) -> bool {
        let board_changed = self.updates.has_changed().unwrap_or(false);
        if !board_changed && !drag_changed {
            return false;
        }

        let snapshot = self.updates.borrow_and_update().clone();
        self.view = BoardView::build(&snapshot, &self.drag);
        self.renders += 1;
        tracing::trace!(revision = snapshot.revision, renders = self.renders, "Board redrawn");
        true
    }

    /// Text rendering of the input row followed by the board
    pub fn render_text(&self) -> String {
        format!("[{}] (Create Task)\n\n{}", self.input, render_text(&self.view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    fn page() -> BoardPage {
        BoardPage::from_config(&BoardConfig::default()).unwrap()
    }

    fn card_contents(page: &BoardPage, column: usize) -> Vec<String> {
        page.view().columns[column]
            .cards
            .iter()
            .map(|c| c.content.clone())
            .collect()
    }

    #[test]
    fn test_initial_render() {
        let page = page();
        assert_eq!(page.renders(), 1);
        assert_eq!(page.view().revision, 0);
        assert_eq!(card_contents(&page, 0), vec!["First task", "Second task"]);
        assert_eq!(page.input(), "");
    }

    #[test]
    fn test_create_task_flow() {
        let mut page = page();

        assert!(!page.handle(UiEvent::InputChanged("Write report".to_string())).unwrap());
        assert_eq!(page.input(), "Write report");

        assert!(page.handle(UiEvent::CreateClicked).unwrap());
        assert_eq!(page.input(), "");
        assert_eq!(page.renders(), 2);
        assert_eq!(
            card_contents(&page, 0),
            vec!["First task", "Second task", "Write report"]
        );
    }

    #[test]
    fn test_create_with_empty_input_does_nothing() {
        let mut page = page();

        assert!(!page.handle(UiEvent::CreateClicked).unwrap());
        assert_eq!(page.renders(), 1);
        assert_eq!(page.store().board().task_count(), 2);
    }

    #[test]
    fn test_drag_and_drop_moves_card() {
        let mut page = page();
        let task = page.view().columns[0].cards[0].id.clone();
        let done = page.view().columns[3].id.clone();

        assert!(page.handle(UiEvent::DragStarted(task.clone())).unwrap());
        assert!(page.view().columns[0].cards[0].is_dragging);
        assert!(page.view().columns[0].is_dragging_over);

        assert!(page
            .handle(UiEvent::DragHovered(Some(DraggableLocation::new(done.clone(), 0))))
            .unwrap());
        assert!(page.view().columns[3].is_dragging_over);

        assert!(page.handle(UiEvent::DragEnded).unwrap());
        assert_eq!(card_contents(&page, 0), vec!["Second task"]);
        assert_eq!(card_contents(&page, 3), vec!["First task"]);
        assert!(!page.view().columns[3].is_dragging_over);
        assert!(!page.view().columns[3].cards[0].is_dragging);
        assert_eq!(page.view().revision, 1);
    }

    #[test]
    fn test_drop_outside_leaves_board() {
        let mut page = page();
        let task = page.view().columns[0].cards[1].id.clone();
        let before = page.store().board();

        page.handle(UiEvent::DragStarted(task)).unwrap();
        page.handle(UiEvent::DragHovered(None)).unwrap();
        assert!(page.view().columns.iter().all(|c| !c.is_dragging_over));

        assert!(page.handle(UiEvent::DragEnded).unwrap());
        assert_eq!(*page.store().board(), *before);
        assert_eq!(page.view().revision, 0);
        assert!(page.view().columns[0].cards.iter().all(|c| !c.is_dragging));
    }

    #[test]
    fn test_cancel_leaves_board() {
        let mut page = page();
        let task = page.view().columns[0].cards[0].id.clone();
        let todo = page.view().columns[1].id.clone();

        page.handle(UiEvent::DragStarted(task)).unwrap();
        page.handle(UiEvent::DragHovered(Some(DraggableLocation::new(todo, 0))))
            .unwrap();
        assert!(page.handle(UiEvent::DragCancelled).unwrap());

        assert_eq!(card_contents(&page, 0), vec!["First task", "Second task"]);
        assert!(card_contents(&page, 1).is_empty());
    }

    #[test]
    fn test_rejected_drop_still_ends_drag() {
        let mut page = page();
        let task = page.view().columns[0].cards[0].id.clone();
        let todo = page.view().columns[1].id.clone();

        page.handle(UiEvent::DragStarted(task)).unwrap();
        page.handle(UiEvent::DragHovered(Some(DraggableLocation::new(todo, 7))))
            .unwrap();

        let err = page.handle(UiEvent::DragEnded).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { .. }));
        assert!(page.view().columns.iter().all(|c| !c.is_dragging_over));
        assert_eq!(page.store().board().task_count(), 2);
    }

    #[test]
    fn test_drag_events_while_idle_do_not_redraw() {
        let mut page = page();
        assert!(!page.handle(UiEvent::DragHovered(None)).unwrap());
        assert!(!page.handle(UiEvent::DragEnded).unwrap());
        assert!(!page.handle(UiEvent::DragCancelled).unwrap());
        assert_eq!(page.renders(), 1);
    }

    #[test]
    fn test_render_text_includes_input() {
        let mut page = page();
        page.handle(UiEvent::InputChanged("draft".to_string())).unwrap();

        let text = page.render_text();
        assert!(text.starts_with("[draft] (Create Task)"));
        assert!(text.contains("- First task"));
    }
}
