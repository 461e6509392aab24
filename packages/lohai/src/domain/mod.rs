//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod events;
pub mod fixtures;
pub mod round;
pub mod rules;
pub mod snapshot;
pub mod state;
pub(crate) mod table;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{hand_has_suit, point_value};
pub use cards_types::{Card, CardValue, Rank, SpecialKind, Suit, Trump};
pub use dealing::Deck;
pub use events::{Notification, ObserverId, RoundEvent, RoundId, RoundObserver};
pub use round::{PlayOutcome, Round, RoundSetup};
pub use rules::SpecialPointPolicy;
pub use snapshot::{PlayerSnapshot, RoundSnapshot};
pub use state::PlayerId;
pub use tricks::{InputKind, PendingInput};
