#![allow(dead_code)]

pub use lohai::domain::fixtures::{card, parse_cards};
use lohai::{InputKind, PlayerId, Round};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

const SEATS: [PlayerId; 4] = [0, 1, 2, 3];

/// Take one uniformly random legal action, trying other choices when one
/// fails. Returns false when nothing succeeds (the deck ran dry mid-chain).
pub fn random_step(round: &mut Round, rng: &mut ChaCha20Rng) -> bool {
    match round.pending_input() {
        Some(p) if p.kind == InputKind::Shaker => {
            let field = round.field_cards();
            let mut victims: Vec<PlayerId> = SEATS
                .into_iter()
                .filter(|&s| s != p.player && field[s as usize].is_some())
                .collect();
            victims.shuffle(rng);
            victims
                .into_iter()
                .any(|v| round.handle_shaker(p.player, v).is_ok())
        }
        Some(p) if p.kind == InputKind::Mover => {
            let won = round.tricks_won();
            let mut moves: Vec<(PlayerId, PlayerId)> = SEATS
                .into_iter()
                .flat_map(|s| SEATS.into_iter().map(move |d| (s, d)))
                .filter(|&(s, d)| s != d && won[s as usize] > 0)
                .collect();
            moves.shuffle(rng);
            moves
                .into_iter()
                .any(|(s, d)| round.handle_mover(p.player, s, d).is_ok())
        }
        Some(p) => {
            let mut recipients: Vec<PlayerId> =
                SEATS.into_iter().filter(|&s| s != p.player).collect();
            recipients.shuffle(rng);
            recipients
                .into_iter()
                .any(|r| round.handle_giver(p.player, r).is_ok())
        }
        None => {
            let player = round.current_player();
            let Ok(mut legal) = round.legal_cards(player) else {
                return false;
            };
            legal.shuffle(rng);
            legal.into_iter().any(|c| round.play_card(player, c).is_ok())
        }
    }
}
