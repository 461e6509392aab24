//! Card parsing and display using compact tokens ("KS", "7H", "TAKER")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, SpecialKind, Suit};
use crate::errors::domain::DomainError;

impl Rank {
    fn token(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl Suit {
    fn token(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
        }
    }
}

impl SpecialKind {
    pub fn name(self) -> &'static str {
        match self {
            SpecialKind::Taker => "TAKER",
            SpecialKind::Giver => "GIVER",
            SpecialKind::Mover => "MOVER",
            SpecialKind::Shaker => "SHAKER",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Plain { suit, rank } => write!(f, "{}{}", rank.token(), suit.token()),
            Card::Special(kind) => f.write_str(kind.name()),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || DomainError::invalid_value(format!("Parse card: {s}"));

        if let Some(kind) = SpecialKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
        {
            return Ok(Card::special(kind));
        }

        let mut chars = s.chars();
        let rank_ch = chars.next().ok_or_else(parse_err)?;
        let suit_ch = chars.next().ok_or_else(parse_err)?;
        if chars.next().is_some() {
            return Err(parse_err());
        }

        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.token() == rank_ch)
            .ok_or_else(parse_err)?;
        let suit = Suit::ALL
            .into_iter()
            .find(|st| st.token() == suit_ch)
            .ok_or_else(parse_err)?;
        Ok(Card::plain(rank, suit))
    }
}
