#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use config::RoundConfig;
pub use domain::{
    Card, Deck, InputKind, Notification, ObserverId, PendingInput, PlayOutcome, PlayerId, Rank,
    Round, RoundEvent, RoundId, RoundObserver, RoundSetup, SpecialKind, SpecialPointPolicy, Suit,
    Trump,
};
pub use errors::DomainError;
