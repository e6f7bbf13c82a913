//! Rules for moving the player and pushing boxes.
//!
//! Illegal moves are not errors, they leave the board untouched and return `Blocked`.
//! Errors are only returned for positions outside the board.

use log::{debug, trace};

use crate::board::{Board, BoardErr};
use crate::data::{Cell, Dir, Pos};
use crate::moves::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Walked,
    Pushed,
    Blocked,
}

impl MoveOutcome {
    pub fn to_move(self, dir: Dir) -> Option<Move> {
        match self {
            MoveOutcome::Walked => Some(Move::new(dir, false)),
            MoveOutcome::Pushed => Some(Move::new(dir, true)),
            MoveOutcome::Blocked => None,
        }
    }
}

/// Moves the player into `target` going in `dir`, pushing a box out of the way if there is one.
///
/// The player has to stand on the cell before `target`,
/// a box can only be pushed onto a vacant cell.
pub fn attempt_move(board: &mut Board, target: Pos, dir: Dir) -> Result<MoveOutcome, BoardErr> {
    let target_cell = board.cell_at(target)?;
    let origin = board.neighbor(target, dir.inverse());
    let beyond = board.neighbor(target, dir);

    if origin == target || !board.is_player(origin)? {
        debug!("No player at {} to move {} into {}", origin, dir, target);
        return Ok(MoveOutcome::Blocked);
    }

    if target_cell.is_box() && beyond != target && board.is_vacant(beyond)? {
        if board.is_goal(beyond)? {
            board.place_box_on_goal(beyond)?;
        } else {
            board.place_box(beyond)?;
        }
        if target_cell == Cell::BoxOnGoal {
            board.place_goal(target)?;
        } else {
            board.place_floor(target)?;
        }
        step_player(board, origin, target)?;
        trace!("Pushed box from {} to {}", target, beyond);
        Ok(MoveOutcome::Pushed)
    } else if target_cell.is_vacant() {
        step_player(board, origin, target)?;
        trace!("Walked from {} to {}", origin, target);
        Ok(MoveOutcome::Walked)
    } else {
        debug!("Can't move {} into {} ({:?})", dir, target, target_cell);
        Ok(MoveOutcome::Blocked)
    }
}

/// `target` must be vacant by now
fn step_player(board: &mut Board, origin: Pos, target: Pos) -> Result<(), BoardErr> {
    let left_goal = board.is_player_on_goal(origin)?;
    if board.is_goal(target)? {
        board.place_player_on_goal(target)?;
    } else {
        board.place_player(target)?;
    }
    if left_goal {
        board.place_goal(origin)?;
    } else {
        board.place_floor(origin)?;
    }
    Ok(())
}

/// Which way the player has to go to get into `target`.
///
/// Looks at the neighbors of `target` in the order up, left, right, down
/// and returns the direction away from the first one holding the player.
/// `None` if the player isn't next to `target`.
pub fn resolve_direction(board: &Board, target: Pos) -> Result<Option<Dir>, BoardErr> {
    board.cell_at(target)?;

    for &side in &[Dir::Up, Dir::Left, Dir::Right, Dir::Down] {
        let neighbor = board.neighbor(target, side);
        // clamped at the edge
        if neighbor == target {
            continue;
        }
        if board.is_player(neighbor)? {
            return Ok(Some(side.inverse()));
        }
    }
    Ok(None)
}

/// Handles a click on `target`: at most one move, decided before the board changes.
pub fn click(board: &mut Board, target: Pos) -> Result<Option<Move>, BoardErr> {
    match resolve_direction(board, target)? {
        Some(dir) => Ok(attempt_move(board, target, dir)?.to_move(dir)),
        None => {
            debug!("Player is not next to {}", target);
            Ok(None)
        }
    }
}
