//! Card game logic: checking suits in hands, scoring cards for a trick,
//! point values.

use super::cards_types::{Card, Suit, Trump};
use super::rules::{SpecialPointPolicy, LEAD_BOOST, TRUMP_BOOST};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit() == Some(suit))
}

/// Point value of a card when it is turned as the round's trump indicator.
pub fn point_value(card: Card, policy: SpecialPointPolicy) -> u32 {
    match card {
        Card::Plain { rank, .. } => 100 + u32::from(rank.value()) * 25,
        Card::Special(kind) => policy.points_for(kind),
    }
}

/// Strength of a plain card within a trick: trump cards get the largest boost,
/// lead-suit cards a smaller one, everything else plays at face value.
///
/// Special cards never take part in rank-based resolution and score `None`.
pub fn trick_score(card: Card, lead: Option<Suit>, trump: Trump) -> Option<u16> {
    let Card::Plain { suit, rank } = card else {
        return None;
    };
    let base = u16::from(rank.value());
    if trump.suit() == Some(suit) {
        Some(base + TRUMP_BOOST)
    } else if lead == Some(suit) {
        Some(base + LEAD_BOOST)
    } else {
        Some(base)
    }
}

/// Index of the strongest card; the first maximum wins ties.
pub fn best_card_index<'a, I>(cards: I, lead: Option<Suit>, trump: Trump) -> Option<usize>
where
    I: IntoIterator<Item = &'a Option<Card>>,
{
    let mut best: Option<(usize, u16)> = None;
    for (idx, slot) in cards.into_iter().enumerate() {
        let Some(score) = slot.and_then(|c| trick_score(c, lead, trump)) else {
            continue;
        };
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
