// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{Card, Rank, SpecialKind, Suit, Trump};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
    ]
}

/// Generate a random Trump (including NO_TRUMP)
pub fn trump() -> impl Strategy<Value = Trump> {
    prop_oneof![
        Just(Trump::Spades),
        Just(Trump::Hearts),
        Just(Trump::Clubs),
        Just(Trump::Diamonds),
        Just(Trump::NoTrump),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn special_kind() -> impl Strategy<Value = SpecialKind> {
    prop::sample::select(SpecialKind::ALL.to_vec())
}

pub fn plain_card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::plain(rank, suit))
}

/// Any card; plain cards are weighted to match their share of the deck.
pub fn card() -> impl Strategy<Value = Card> {
    prop_oneof![
        11 => plain_card(),
        2 => special_kind().prop_map(Card::special),
    ]
}

/// A hand of up to nine cards drawn from a real deck (no impossible
/// duplicates).
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    any::<u64>().prop_flat_map(|seed| {
        let deck: Vec<Card> = crate::domain::Deck::shuffled_with_seed(seed)
            .cards()
            .copied()
            .collect();
        (0usize..=9).prop_map(move |n| deck[..n].to_vec())
    })
}

/// Four distinct plain cards for one complete trick, in seat order.
pub fn plain_trick() -> impl Strategy<Value = [Card; 4]> {
    any::<u64>().prop_map(|seed| {
        let deck = crate::domain::Deck::shuffled_with_seed(seed);
        let mut plain = deck
            .cards()
            .copied()
            .filter(|c| !c.is_special());
        std::array::from_fn(|_| plain.next().unwrap_or(Card::plain(Rank::Two, Suit::Spades)))
    })
}
