use lohai_test_support::logging;

use crate::config::RoundConfig;
use crate::domain::fixtures::{card, parse_cards};
use crate::domain::round::{Round, RoundSetup};
use crate::domain::{Deck, Suit};
use crate::errors::domain::DomainError;

fn small_round() -> Round {
    logging::init();
    let hands = [
        parse_cards(&["2C", "2D"]),
        parse_cards(&["3C", "2H"]),
        parse_cards(&["4D", "2S"]),
        parse_cards(&["5C", "6D"]),
    ];
    Round::from_setup(RoundSetup::new(hands, card("KH")), RoundConfig::default()).unwrap()
}

/// Nine-card hands with hearts as trump (KH turned).
fn fixture_round() -> Round {
    logging::init();
    let hands = [
        parse_cards(&["3C", "7C", "QC", "8H", "8S", "JS", "8D", "JD", "TAKER"]),
        parse_cards(&["4C", "6C", "9C", "5H", "9H", "QS", "3D", "4D", "GIVER"]),
        parse_cards(&["5C", "8C", "JC", "2H", "6S", "9S", "2D", "6D", "7D"]),
        parse_cards(&["4H", "7H", "JH", "2S", "5S", "7S", "KS", "TAKER", "GIVER"]),
    ];
    let deck = Deck::from_cards(parse_cards(&[
        "9D", "KC", "3H", "6H", "2C", "5D", "QH", "3S", "4S", "QD",
    ]));
    let setup = RoundSetup::new(hands, card("KH")).with_deck(deck);
    Round::from_setup(setup, RoundConfig::default()).unwrap()
}

#[test]
fn cannot_play_cards_not_in_hand() {
    let mut round = small_round();

    // Another player's card
    assert!(matches!(
        round.play_card(0, card("3C")),
        Err(DomainError::InvalidCard(_))
    ));
    // A card nobody holds
    assert!(matches!(
        round.play_card(0, card("TAKER")),
        Err(DomainError::InvalidCard(_))
    ));
    assert_eq!(round.get_hand_for_player(0).unwrap().len(), 2);
}

#[test]
fn play_in_order() {
    let mut round = small_round();

    round.play_card(0, card("2C")).unwrap();
    assert_eq!(
        round.play_card(2, card("4D")).unwrap_err(),
        DomainError::not_your_turn("Not player 2's turn, expected player 1")
    );

    round.play_card(1, card("3C")).unwrap();
    round.play_card(2, card("4D")).unwrap();
    let outcome = round.play_card(3, card("5C")).unwrap();
    assert!(outcome.trick_completed);
}

#[test]
fn suit_follow() {
    let mut round = small_round();

    round.play_card(0, card("2C")).unwrap();
    assert_eq!(round.lead_suit(), Some(Suit::Clubs));

    // Seat 1 holds a club and must play it.
    assert!(matches!(
        round.play_card(1, card("2H")),
        Err(DomainError::InvalidCard(_))
    ));
    round.play_card(1, card("3C")).unwrap();

    // Seat 2 has no club and may play anything.
    round.play_card(2, card("4D")).unwrap();

    assert!(matches!(
        round.play_card(3, card("6D")),
        Err(DomainError::InvalidCard(_))
    ));
    round.play_card(3, card("5C")).unwrap();
}

#[test]
fn special_instead_of_suit() {
    logging::init();
    let hands = [
        parse_cards(&["2C", "2D"]),
        parse_cards(&["3C", "TAKER"]),
        parse_cards(&["4D", "2S"]),
        parse_cards(&["5C", "6D"]),
    ];
    let mut round =
        Round::from_setup(RoundSetup::new(hands, card("KH")), RoundConfig::default()).unwrap();

    round.play_card(0, card("2C")).unwrap();
    round.play_card(1, card("TAKER")).unwrap();
    assert_eq!(round.current_player(), 2);
}

#[test]
fn second_player_determines_suit() {
    logging::init();
    let hands = [
        parse_cards(&["TAKER", "2D"]),
        parse_cards(&["3C", "2H"]),
        parse_cards(&["4D", "2S"]),
        parse_cards(&["5C", "6D"]),
    ];
    let mut round =
        Round::from_setup(RoundSetup::new(hands, card("KH")), RoundConfig::default()).unwrap();

    round.play_card(0, card("TAKER")).unwrap();
    assert_eq!(round.lead_suit(), None);
    round.play_card(1, card("3C")).unwrap();
    assert_eq!(round.lead_suit(), Some(Suit::Clubs));
    round.play_card(2, card("4D")).unwrap();

    assert!(round.play_card(3, card("6D")).is_err());
    round.play_card(3, card("5C")).unwrap();
}

#[test]
fn legal_cards_follow_lead() {
    let mut round = fixture_round();

    // Leader may play anything.
    assert_eq!(round.legal_cards(0).unwrap().len(), 9);

    round.play_card(0, card("3C")).unwrap();
    let legal = round.legal_cards(1).unwrap();
    assert_eq!(legal, parse_cards(&["4C", "6C", "9C", "GIVER"]));
    // Seat 3 has no clubs.
    assert_eq!(round.legal_cards(3).unwrap().len(), 9);
}

#[test]
fn highest_lead_suit_wins() {
    let mut round = fixture_round();

    round.play_card(0, card("3C")).unwrap();
    round.play_card(1, card("4C")).unwrap();
    round.play_card(2, card("5C")).unwrap();
    let outcome = round.play_card(3, card("7S")).unwrap();

    assert_eq!(outcome.trick_winner, Some(2));
    assert_eq!(round.tricks_won(), [0, 0, 1, 0]);
    assert_eq!(round.current_player(), 2);
    assert_eq!(round.first_player(), 2);
    assert_eq!(round.field_cards(), [None; 4]);
    assert_eq!(
        round.last_trick(),
        Some([
            Some(card("3C")),
            Some(card("4C")),
            Some(card("5C")),
            Some(card("7S"))
        ])
    );
}

#[test]
fn highest_trump_suit_wins() {
    let mut round = fixture_round();

    round.play_card(0, card("7C")).unwrap();
    round.play_card(1, card("4C")).unwrap();
    round.play_card(2, card("5C")).unwrap();
    round.play_card(3, card("4H")).unwrap();

    assert_eq!(round.tricks_won(), [0, 0, 0, 1]);
}

#[test]
fn seat_zero_wins_are_credited() {
    let mut round = fixture_round();

    round.play_card(0, card("QC")).unwrap();
    round.play_card(1, card("4C")).unwrap();
    round.play_card(2, card("5C")).unwrap();
    let outcome = round.play_card(3, card("2S")).unwrap();

    assert_eq!(outcome.trick_winner, Some(0));
    assert_eq!(round.tricks_won(), [1, 0, 0, 0]);
    assert_eq!(round.current_player(), 0);
}

#[test]
fn last_taker_wins_and_leads() {
    let mut round = fixture_round();

    round.play_card(0, card("TAKER")).unwrap();
    round.play_card(1, card("4C")).unwrap();
    round.play_card(2, card("5C")).unwrap();
    round.play_card(3, card("TAKER")).unwrap();

    assert_eq!(round.tricks_won(), [0, 0, 0, 1]);
    assert!(matches!(
        round.play_card(0, card("3C")),
        Err(DomainError::NotYourTurn(_))
    ));
    round.play_card(3, card("4H")).unwrap();
}

#[test]
fn last_giver_gives_trick_away() {
    let mut round = fixture_round();

    round.play_card(0, card("TAKER")).unwrap();
    round.play_card(1, card("4C")).unwrap();
    round.play_card(2, card("5C")).unwrap();
    let outcome = round.play_card(3, card("GIVER")).unwrap();

    assert!(!outcome.trick_completed);
    let pending = outcome.awaiting.expect("giver input pending");
    assert_eq!(pending.player, 3);
    assert_eq!(round.tricks_won(), [0; 4]);

    // Cannot give to self
    assert_eq!(
        round.handle_giver(3, 3).unwrap_err(),
        DomainError::invalid_move("Not allowed to give to self")
    );
    // Only the giver chooses
    assert!(matches!(
        round.handle_giver(0, 1),
        Err(DomainError::InvalidMove(_))
    ));
    // No more plays while the trick is undecided
    assert!(round.play_card(3, card("4H")).is_err());

    let outcome = round.handle_giver(3, 1).unwrap();
    assert_eq!(outcome.trick_winner, Some(1));
    assert_eq!(round.tricks_won(), [0, 1, 0, 0]);

    assert!(matches!(
        round.play_card(3, card("4H")),
        Err(DomainError::NotYourTurn(_))
    ));
    round.play_card(1, card("6C")).unwrap();
}

#[test]
fn giver_before_trick_end_is_rejected() {
    let mut round = fixture_round();

    round.play_card(0, card("3C")).unwrap();
    assert_eq!(
        round.handle_giver(1, 2).unwrap_err(),
        DomainError::invalid_move("Trick is not yet over")
    );
}

#[test]
fn giver_on_fresh_trick_is_rejected() {
    let mut round = fixture_round();
    round.play_card(0, card("3C")).unwrap();
    round.play_card(1, card("4C")).unwrap();
    round.play_card(2, card("5C")).unwrap();
    round.play_card(3, card("7S")).unwrap();

    assert!(matches!(
        round.handle_giver(2, 1),
        Err(DomainError::InvalidMove(_))
    ));
}

#[test]
fn most_recent_special_decides() {
    let mut round = fixture_round();

    round.play_card(0, card("TAKER")).unwrap();
    round.play_card(1, card("GIVER")).unwrap();
    round.play_card(2, card("5C")).unwrap();
    let outcome = round.play_card(3, card("TAKER")).unwrap();

    // Seat 3's taker came last.
    assert_eq!(outcome.trick_winner, Some(3));
}

#[test]
fn playing_twice_in_a_trick_is_rejected() {
    let mut round = fixture_round();
    round.play_card(0, card("3C")).unwrap();
    assert!(matches!(
        round.play_card(0, card("7C")),
        Err(DomainError::NotYourTurn(_))
    ));
}

#[test]
fn unknown_seat_is_rejected() {
    let mut round = fixture_round();
    assert!(matches!(
        round.play_card(4, card("3C")),
        Err(DomainError::InvalidMove(_))
    ));
    assert!(round.get_hand_for_player(9).is_err());
    assert!(round.legal_cards(4).is_err());
}
