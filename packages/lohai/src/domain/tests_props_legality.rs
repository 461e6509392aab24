use lohai_test_support::proptest_prelude::proptest_config;
use proptest::prelude::*;

use crate::domain::dealing::Deck;
use crate::domain::table::Table;
use crate::domain::test_gens;
use crate::domain::tricks::Trick;
use crate::domain::{Card, Suit};

fn table_with(lead: Card, hand: Vec<Card>) -> Table {
    Table {
        deck: Deck::from_cards(Vec::new()),
        hands: [vec![lead], hand, Vec::new(), Vec::new()],
        tricks_won: [0; 4],
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property: legal cards come from the hand, specials are always legal,
    /// and a player holding the lead suit must follow it.
    #[test]
    fn prop_legal_cards_follow_suit(
        hand in test_gens::hand(),
        lead in test_gens::plain_card(),
    ) {
        prop_assume!(!hand.contains(&lead));
        let mut table = table_with(lead, hand.clone());
        let mut trick = Trick::new(0);
        trick.play_card(&mut table, 0, lead).unwrap();
        let lead_suit = lead.suit().unwrap();

        let legal = trick.legal_cards(&table, 1);
        let holds_lead = hand.iter().any(|c| c.suit() == Some(lead_suit));

        for card in &legal {
            prop_assert!(hand.contains(card));
            if holds_lead && !card.is_special() {
                prop_assert_eq!(card.suit(), Some(lead_suit));
            }
        }
        for card in hand.iter().filter(|c| c.is_special()) {
            prop_assert!(legal.contains(card), "special {} must be legal", card);
        }
        if !holds_lead {
            let mut all = hand.clone();
            all.sort();
            all.dedup();
            prop_assert_eq!(legal.clone(), all);
        }

        // legal_cards and is_valid_play agree.
        for card in &hand {
            prop_assert_eq!(
                trick.is_valid_play(&table, 1, *card).is_ok(),
                legal.contains(card)
            );
        }
    }

    /// Property: the leader may play any card in hand.
    #[test]
    fn prop_leader_plays_anything(hand in test_gens::hand()) {
        let table = Table {
            deck: Deck::from_cards(Vec::new()),
            hands: [hand.clone(), Vec::new(), Vec::new(), Vec::new()],
            tricks_won: [0; 4],
        };
        let trick = Trick::new(0);
        for card in &hand {
            prop_assert!(trick.is_valid_play(&table, 0, *card).is_ok());
        }
    }

    /// Property: a card outside the hand is never valid.
    #[test]
    fn prop_foreign_card_rejected(hand in test_gens::hand(), card in test_gens::card()) {
        prop_assume!(!hand.contains(&card));
        let table = table_with(Card::plain(crate::domain::Rank::Two, Suit::Spades), hand);
        let trick = Trick::new(1);
        prop_assert!(trick.is_valid_play(&table, 1, card).is_err());
    }
}
