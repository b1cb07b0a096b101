//! Plain-text scoreboard for the terminal.

use crate::domain::scoreboard::Scoreboard;

/// One header line, one row per player, and a closing line once someone has
/// won. `>` marks the player up, `*` the winner.
pub fn render_scoreboard(board: &Scoreboard) -> String {
    let mut out = board.title.clone();
    if let Some(id) = &board.match_id {
        out.push_str(&format!("  [shared {id}]"));
    }
    out.push('\n');

    // padding counts chars, so width must too
    let width = board
        .rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);
    for row in &board.rows {
        let marker = if row.is_winner {
            '*'
        } else if row.is_current {
            '>'
        } else {
            ' '
        };
        let recent = row
            .recent_throws
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let line = format!(
            "{marker} {:<width$}  {:>4}  {recent}",
            row.name, row.remaining_score
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if let Some(winner) = &board.winner_name {
        out.push_str(&format!("{winner} wins!\n"));
    }
    out
}
