//! Text rendering of boards, decisions and the full report.
//!
//! Room 0 is the leftmost cell. `#` marks a room the princess may occupy, a blank marks an
//! eliminated room.

use std::fmt::Write;

use crate::core::castle::Castle;
use crate::core::state::State;
use crate::solution::Plan;

const UNCERTAIN: char = '#';
const ELIMINATED: char = ' ';

/// Three-line framed row, one cell per room.
pub fn render_board(castle: Castle, state: State) -> String {
    let rooms = castle.rooms();
    let rule = format!("-{}", "--".repeat(rooms));

    let mut cells = String::with_capacity(2 * rooms + 1);
    cells.push('|');
    for room in 0..rooms {
        cells.push(if state.is_eliminated(room) {
            ELIMINATED
        } else {
            UNCERTAIN
        });
        cells.push('|');
    }

    format!("{rule}\n{cells}\n{rule}")
}

/// Marker row aligned with [`render_board`]'s cells: `X` over the inspected room.
pub fn render_decision(castle: Castle, room: usize) -> String {
    let mut out = String::with_capacity(2 * castle.rooms() + 1);
    out.push(' ');
    for r in 0..castle.rooms() {
        out.push(if r == room { 'X' } else { '.' });
        out.push(' ');
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn summary_line(plan: &Plan) -> String {
    format!(
        "It will take {} move(s) to guarantee the princess is found in a castle with {} room(s).",
        plan.nights(),
        plan.castle.rooms()
    )
}

/// Summary line, the starting board, then a decision and the resulting board for every night.
pub fn render_report(plan: &Plan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", summary_line(plan));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", render_board(plan.castle, plan.states[0]));

    for (night, (&room, &state)) in plan.moves.iter().zip(&plan.states[1..]).enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "night {}: inspect room {room}", night + 1);
        let _ = writeln!(out, "{}", render_decision(plan.castle, room));
        let _ = writeln!(out, "{}", render_board(plan.castle, state));
    }

    out
}
