use crate::presentation::view::{BoardView, CardView};

const COLUMN_WIDTH: usize = 22;
const SEPARATOR: &str = " | ";

/// Draws the board as side-by-side text columns
///
/// The hovered drop target gets a `*` after its name and the dragged card is
/// prefixed with `>` instead of `-`.
pub fn render_text(view: &BoardView) -> String {
    let mut out = String::new();

    let headers: Vec<String> = view
        .columns
        .iter()
        .map(|col| {
            let marker = if col.is_dragging_over { " *" } else { "" };
            cell(&format!("{}{}", col.name, marker))
        })
        .collect();
    push_row(&mut out, &headers);

    let rules = vec!["-".repeat(COLUMN_WIDTH); view.columns.len()];
    push_row(&mut out, &rules);

    let depth = view
        .columns
        .iter()
        .map(|col| col.cards.len())
        .max()
        .unwrap_or(0);
    for row in 0..depth {
        let cells: Vec<String> = view
            .columns
            .iter()
            .map(|col| col.cards.get(row).map(card).unwrap_or_else(|| cell("")))
            .collect();
        push_row(&mut out, &cells);
    }

    out
}

fn card(card: &CardView) -> String {
    let bullet = if card.is_dragging { '>' } else { '-' };
    cell(&format!("{} {}", bullet, card.content))
}

/// Truncates or pads `text` to exactly one column width
fn cell(text: &str) -> String {
    let len = text.chars().count();
    if len > COLUMN_WIDTH {
        let mut truncated: String = text.chars().take(COLUMN_WIDTH - 1).collect();
        truncated.push('~');
        truncated
    } else {
        format!("{}{}", text, " ".repeat(COLUMN_WIDTH - len))
    }
}

fn push_row(out: &mut String, cells: &[String]) {
    let used = cells
        .iter()
        .rposition(|c| !c.trim().is_empty())
        .map_or(0, |last| last + 1);
    out.push_str(cells[..used].join(SEPARATOR).trim_end());
    out.push('\n');
}
