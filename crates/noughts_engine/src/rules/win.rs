//! Win detection.

use crate::{Board, Line, Player, LINES};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first one whose three
/// cells share a mark wins.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((player, line))
    })
}
