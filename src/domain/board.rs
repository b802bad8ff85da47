use crate::{
    config::BoardConfig,
    domain::task::{Task, TaskId},
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ColumnId(String);

impl ColumnId {
    /// Mints a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(|uuid| Self(uuid.to_string()))
            .map_err(|_| BoardError::InvalidId(s.to_string()))
    }
}

impl TryFrom<String> for ColumnId {
    type Error = BoardError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position inside a column: the column (droppable) and the slot index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    pub droppable_id: ColumnId,
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(droppable_id: ColumnId, index: usize) -> Self {
        Self {
            droppable_id,
            index,
        }
    }
}

/// One workflow stage: a named, ordered list of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    id: ColumnId,
    name: String,
    items: Vec<Task>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ColumnId::generate(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Kanban board state
///
/// The column set is fixed when the board is built; every transformation
/// returns a new board in which only the `items` sequences differ. Boards
/// are only built through [`Board::from_config`], never deserialized, so id
/// uniqueness holds for every board in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Builds the starting board described by `config`
    ///
    /// Column ids are minted fresh on every call, so two boards built from the
    /// same config never share ids.
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    // Seeds naming an unknown column are skipped; `validate` rejects them first
    fn build(config: &BoardConfig) -> Self {
        let mut columns: Vec<Column> = config
            .columns
            .iter()
            .map(|name| Column::new(name.clone()))
            .collect();

        for seed in &config.seed_tasks {
            if let Some(column) = columns.iter_mut().find(|col| col.name == seed.column) {
                column.items.push(Task::new(seed.content.clone()));
            }
        }

        Self { columns }
    }

    /// Columns in left-to-right display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name == name)
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Finds the column and index currently holding `task_id`
    pub fn locate_task(&self, task_id: &TaskId) -> Option<DraggableLocation> {
        self.columns.iter().find_map(|col| {
            col.items
                .iter()
                .position(|task| &task.id == task_id)
                .map(|index| DraggableLocation::new(col.id.clone(), index))
        })
    }

    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.locate_task(task_id).is_some()
    }

    fn position_of(&self, id: &ColumnId) -> Result<usize> {
        self.columns
            .iter()
            .position(|col| &col.id == id)
            .ok_or_else(|| BoardError::ColumnNotFound(id.to_string()))
    }

    /// Returns a copy of the board with `task` appended to `column_id`
    pub fn with_task_appended(&self, column_id: &ColumnId, task: Task) -> Result<Self> {
        let pos = self.position_of(column_id)?;
        let mut next = self.clone();
        next.columns[pos].items.push(task);
        Ok(next)
    }

    /// Returns a copy of the board with the task at `source` removed and
    /// reinserted at `destination`
    ///
    /// When both locations name the same column the removal happens first, so
    /// `destination.index` addresses the shortened sequence.
    pub fn with_item_moved(
        &self,
        source: &DraggableLocation,
        destination: &DraggableLocation,
    ) -> Result<Self> {
        let src_pos = self.position_of(&source.droppable_id)?;
        let dest_pos = self.position_of(&destination.droppable_id)?;

        let src_len = self.columns[src_pos].len();
        if source.index >= src_len {
            return Err(BoardError::IndexOutOfRange {
                column: source.droppable_id.to_string(),
                index: source.index,
                len: src_len,
            });
        }

        let dest_len = if src_pos == dest_pos {
            src_len - 1
        } else {
            self.columns[dest_pos].len()
        };
        if destination.index > dest_len {
            return Err(BoardError::IndexOutOfRange {
                column: destination.droppable_id.to_string(),
                index: destination.index,
                len: dest_len,
            });
        }

        let mut next = self.clone();
        let removed = next.columns[src_pos].items.remove(source.index);
        next.columns[dest_pos]
            .items
            .insert(destination.index, removed);
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::build(&BoardConfig::default())
    }
}
