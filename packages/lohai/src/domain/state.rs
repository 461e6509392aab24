use crate::domain::rules::PLAYERS;
use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 0..=3

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    (p + 1) % PLAYERS as PlayerId
}

/// Reject seats outside 0..=3 before they are used as an index.
pub fn require_seat(player: PlayerId, ctx: &'static str) -> Result<usize, DomainError> {
    let idx = player as usize;
    if idx < PLAYERS {
        Ok(idx)
    } else {
        Err(DomainError::invalid_move(format!(
            "Seat {player} does not exist ({ctx})"
        )))
    }
}
