use serde::{Deserialize, Serialize};

use crate::domain::SpecialKind;

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 9;
/// Every special kind appears twice in a deck.
pub const SPECIAL_COPIES: usize = 2;
/// 11 ranks x 4 suits + 2 copies of each of the 4 special kinds.
pub const DECK_SIZE: usize = 11 * 4 + SPECIAL_COPIES * 4;

pub const TRUMP_BOOST: u16 = 200;
pub const LEAD_BOOST: u16 = 100;

/// How special cards are valued when one is turned as the trump card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecialPointPolicy {
    /// Each special kind carries its own fixed score.
    #[default]
    PerKind,
    /// Every special card scores the same.
    Flat { points: u32 },
}

impl SpecialPointPolicy {
    pub fn points_for(self, kind: SpecialKind) -> u32 {
        match self {
            SpecialPointPolicy::PerKind => match kind {
                SpecialKind::Shaker => 100,
                SpecialKind::Giver => 125,
                SpecialKind::Taker => 425,
                SpecialKind::Mover => 450,
            },
            SpecialPointPolicy::Flat { points } => points,
        }
    }
}
