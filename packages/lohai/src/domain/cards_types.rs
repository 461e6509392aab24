//! Core card-related types: Card, Rank, Suit, SpecialKind, Trump

use crate::errors::domain::DomainError;

/// Declaration order is the sort order: Spades < Hearts < Clubs < Diamonds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
    NoTrump,
}

impl Trump {
    /// The suit that carries the trump boost, if any.
    pub fn suit(self) -> Option<Suit> {
        match self {
            Trump::Spades => Some(Suit::Spades),
            Trump::Hearts => Some(Suit::Hearts),
            Trump::Clubs => Some(Suit::Clubs),
            Trump::Diamonds => Some(Suit::Diamonds),
            Trump::NoTrump => None,
        }
    }

    /// Trump named by the card turned after dealing; special cards give no trump.
    pub fn from_turned(card: Card) -> Self {
        match card.suit() {
            Some(suit) => suit.into(),
            None => Trump::NoTrump,
        }
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Spades => Trump::Spades,
            Suit::Hearts => Trump::Hearts,
            Suit::Clubs => Trump::Clubs,
            Suit::Diamonds => Trump::Diamonds,
        }
    }
}

/// Lohai plays without tens: jack follows nine directly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 11] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value used for trick ranking and point values (2..=12).
    pub const fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Jack => 10,
            Rank::Queen => 11,
            Rank::King => 12,
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ALL
            .into_iter()
            .find(|r| r.value() == value)
            .ok_or_else(|| DomainError::invalid_value(format!("{value} is not a valid card value")))
    }
}

/// Declaration order is the sort order between special cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SpecialKind {
    Shaker,
    Giver,
    Taker,
    Mover,
}

impl SpecialKind {
    pub const ALL: [SpecialKind; 4] = [
        SpecialKind::Taker,
        SpecialKind::Giver,
        SpecialKind::Mover,
        SpecialKind::Shaker,
    ];
}

/// The value half of a card, used when building a card from loose parts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardValue {
    Rank(Rank),
    Special(SpecialKind),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Plain { suit: Suit, rank: Rank },
    Special(SpecialKind),
}

impl Card {
    pub const fn plain(rank: Rank, suit: Suit) -> Self {
        Card::Plain { suit, rank }
    }

    pub const fn special(kind: SpecialKind) -> Self {
        Card::Special(kind)
    }

    /// Build a card from a value and an optional suit.
    ///
    /// Ranked cards need a suit; special cards must not carry one.
    pub fn new(value: CardValue, suit: Option<Suit>) -> Result<Self, DomainError> {
        match (value, suit) {
            (CardValue::Rank(rank), Some(suit)) => Ok(Card::plain(rank, suit)),
            (CardValue::Rank(rank), None) => Err(DomainError::invalid_value(format!(
                "{rank:?} needs a suit"
            ))),
            (CardValue::Special(kind), None) => Ok(Card::special(kind)),
            (CardValue::Special(kind), Some(suit)) => Err(DomainError::invalid_value(format!(
                "{kind:?} cannot have suit {suit:?}; special cards have no suit"
            ))),
        }
    }

    pub const fn suit(self) -> Option<Suit> {
        match self {
            Card::Plain { suit, .. } => Some(suit),
            Card::Special(_) => None,
        }
    }

    pub const fn rank(self) -> Option<Rank> {
        match self {
            Card::Plain { rank, .. } => Some(rank),
            Card::Special(_) => None,
        }
    }

    pub const fn special_kind(self) -> Option<SpecialKind> {
        match self {
            Card::Plain { .. } => None,
            Card::Special(kind) => Some(kind),
        }
    }

    pub const fn is_special(self) -> bool {
        matches!(self, Card::Special(_))
    }

    pub const fn value(self) -> CardValue {
        match self {
            Card::Plain { rank, .. } => CardValue::Rank(rank),
            Card::Special(kind) => CardValue::Special(kind),
        }
    }
}

// Plain cards sort by suit then rank; every special card sorts after every
// plain card, and specials sort by kind.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Card::Plain { suit: s1, rank: r1 }, Card::Plain { suit: s2, rank: r2 }) => {
                s1.cmp(s2).then(r1.cmp(r2))
            }
            (Card::Plain { .. }, Card::Special(_)) => std::cmp::Ordering::Less,
            (Card::Special(_), Card::Plain { .. }) => std::cmp::Ordering::Greater,
            (Card::Special(k1), Card::Special(k2)) => k1.cmp(k2),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
