use crate::domain::{board::DraggableLocation, task::TaskId};
use serde::{Deserialize, Serialize};

/// How a drag gesture finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DropReason {
    Drop,
    Cancel,
}

/// Outcome of a drag gesture as reported by the drag-and-drop layer
///
/// `destination` is `None` when the card was released outside every column
/// or the drag was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    pub draggable_id: TaskId,
    pub source: DraggableLocation,
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
    pub reason: DropReason,
}

impl DropResult {
    /// Whether the gesture ended on a column and a store move should follow
    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::ColumnId;

    #[test]
    fn test_parse_collaborator_payload() {
        let task_id = TaskId::generate();
        let column = ColumnId::generate();
        let json = format!(
            r#"{{
                "draggableId": "{task}",
                "source": {{"droppableId": "{col}", "index": 1}},
                "destination": null,
                "reason": "DROP"
            }}"#,
            task = task_id,
            col = column
        );

        let result: DropResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.draggable_id, task_id);
        assert_eq!(result.source, DraggableLocation::new(column, 1));
        assert!(!result.has_destination());
        assert_eq!(result.reason, DropReason::Drop);
    }

    #[test]
    fn test_missing_destination_defaults_to_none() {
        let json = format!(
            r#"{{"draggableId": "{}", "source": {{"droppableId": "{}", "index": 0}}, "reason": "CANCEL"}}"#,
            TaskId::generate(),
            ColumnId::generate()
        );
        let result: DropResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.destination, None);
        assert_eq!(result.reason, DropReason::Cancel);
    }
}
