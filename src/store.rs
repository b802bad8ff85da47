use crate::{
    config::BoardConfig,
    domain::{Board, ColumnId, DraggableLocation, DropResult, Task, TaskId},
    error::{BoardError, Result},
};
use std::sync::Arc;
use tokio::sync::watch;

/// An immutable view of the board after a given number of mutations
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub revision: u64,
    pub board: Arc<Board>,
}

/// Holds the current board and publishes a new snapshot after every mutation
///
/// All mutations go through the pure transformations on [`Board`]; the store
/// only swaps in the result and notifies subscribers. No-ops publish nothing.
pub struct BoardStore {
    inbox: ColumnId,
    tx: watch::Sender<Snapshot>,
}

impl BoardStore {
    /// Creates a store over `board`, appending new tasks to `inbox`
    pub fn new(board: Board, inbox: ColumnId) -> Result<Self> {
        if board.column(&inbox).is_none() {
            return Err(BoardError::ColumnNotFound(inbox.to_string()));
        }

        let (tx, _) = watch::channel(Snapshot {
            revision: 0,
            board: Arc::new(board),
        });
        Ok(Self { inbox, tx })
    }

    /// Builds the starting board from `config` and resolves its inbox column
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        let board = Board::from_config(config)?;
        let inbox_name = config
            .inbox_name()
            .ok_or_else(|| BoardError::ConfigError("no inbox column".to_string()))?;
        let inbox = board
            .column_by_name(inbox_name)
            .map(|col| col.id().clone())
            .ok_or_else(|| BoardError::ColumnNotFound(inbox_name.to_string()))?;
        Self::new(board, inbox)
    }

    pub fn inbox(&self) -> &ColumnId {
        &self.inbox
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    pub fn board(&self) -> Arc<Board> {
        Arc::clone(&self.tx.borrow().board)
    }

    /// Registers a new subscriber; the current snapshot counts as already seen
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Applies `transform` to the current board and publishes the result
    ///
    /// Read, transform and publish all happen under the channel's write lock,
    /// so concurrent callers never build from the same stale board. Returns
    /// the new revision, or `None` when the board came back unchanged.
    fn commit<F>(&self, transform: F) -> Result<Option<u64>>
    where
        F: FnOnce(&Board) -> Result<Board>,
    {
        let mut outcome = Ok(None);
        self.tx.send_if_modified(|snapshot| match transform(snapshot.board.as_ref()) {
            Ok(next) if next == *snapshot.board => false,
            Ok(next) => {
                snapshot.revision += 1;
                snapshot.board = Arc::new(next);
                outcome = Ok(Some(snapshot.revision));
                true
            }
            Err(e) => {
                outcome = Err(e);
                false
            }
        });
        outcome
    }

    /// Appends a task with `text` to the inbox column
    ///
    /// Returns `None` without touching the board when `text` is empty.
    pub fn create_task(&self, text: &str) -> Option<TaskId> {
        if text.is_empty() {
            tracing::trace!("Ignoring empty task text");
            return None;
        }

        let task = Task::new(text);
        let id = task.id.clone();
        // The inbox is checked in `new` and the column set never changes
        match self.commit(|board| board.with_task_appended(&self.inbox, task)) {
            Ok(revision) => {
                tracing::debug!(task = %id, column = %self.inbox, ?revision, "Created task");
                Some(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Inbox column missing, task dropped");
                None
            }
        }
    }

    /// Moves the task at `source` to `destination`
    pub fn move_item(
        &self,
        source: &DraggableLocation,
        destination: &DraggableLocation,
    ) -> Result<()> {
        let revision = self
            .commit(|board| board.with_item_moved(source, destination))
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected move");
                e
            })?;

        match revision {
            Some(revision) => tracing::debug!(
                from = %source.droppable_id,
                from_index = source.index,
                to = %destination.droppable_id,
                to_index = destination.index,
                revision,
                "Moved task"
            ),
            None => tracing::trace!(
                column = %source.droppable_id,
                index = source.index,
                "Task dropped in place"
            ),
        }
        Ok(())
    }

    /// Applies the outcome of a drag gesture
    ///
    /// Returns `Ok(false)` when the gesture has no destination; the board is
    /// left unchanged in that case.
    pub fn apply_drop(&self, result: &DropResult) -> Result<bool> {
        let Some(destination) = &result.destination else {
            tracing::trace!(task = %result.draggable_id, "Drop without destination ignored");
            return Ok(false);
        };
        self.move_item(&result.source, destination)?;
        Ok(true)
    }
}
